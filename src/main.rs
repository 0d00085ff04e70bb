use clap::Parser;
use wb_adapter::utils::logger;
use wb_adapter::{
    AdapterError, CliArgs, Command, FolderOutcome, ReqwestJsonClient, WbProvider,
};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let exit_code = match run(&args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("wb failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

async fn run(args: &CliArgs) -> wb_adapter::Result<i32> {
    let config = args.adapter_config()?;
    let client = ReqwestJsonClient::from_config(&config);
    let provider = WbProvider::new(config, client);

    match &args.command {
        Command::Mkdir { name } => {
            let result = provider.create_folder(name).await?;
            match result.body {
                FolderOutcome::Created(path) => {
                    tracing::info!("Folder {} created ({})", name, result.status);
                    println!("{}", path);
                    Ok(0)
                }
                FolderOutcome::Rejected(body) => {
                    eprintln!("❌ WaterButler answered {}", result.status);
                    println!("{}", serde_json::to_string_pretty(&body)?);
                    Ok(1)
                }
            }
        }
        Command::Upload { file, name } => {
            let remote_name = match name {
                Some(name) => name.clone(),
                None => file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
                    .ok_or_else(|| AdapterError::ConfigError {
                        message: format!("Cannot derive a file name from {}", file.display()),
                    })?,
            };

            let content = tokio::fs::read(file).await?;
            tracing::info!("Uploading {} ({} bytes)", remote_name, content.len());

            let result = provider.upload_file(&remote_name, content).await?;
            if result.is_success() {
                let stored = WbProvider::<ReqwestJsonClient>::extract_uploaded_filename(&result.body)?;
                println!("{}", stored);
                Ok(0)
            } else {
                eprintln!("❌ WaterButler answered {}", result.status);
                println!("{}", serde_json::to_string_pretty(&result.body)?);
                Ok(1)
            }
        }
    }
}

fn exit_code_for(error: &AdapterError) -> i32 {
    if error.is_config() {
        2
    } else if error.is_transport() {
        3
    } else {
        1
    }
}
