use clap::Parser;
use number_facts::utils::{logger, validation::Validate};
use number_facts::{handle, ApiResponse, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting number-facts CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let response = handle(&config.to_request());
    println!("{}", render(&config, &response)?);

    // 根據狀態碼決定退出碼
    let exit_code = match response.status_code {
        200 => 0,
        400 => 2,
        _ => 3,
    };
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn render(config: &CliConfig, response: &ApiResponse) -> anyhow::Result<String> {
    let output = if config.body_only {
        if !config.pretty {
            return Ok(response.body.clone());
        }
        let body: serde_json::Value = serde_json::from_str(&response.body)?;
        serde_json::to_string_pretty(&body)?
    } else if config.pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(output)
}
