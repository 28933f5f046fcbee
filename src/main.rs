use clap::Parser;
use ml_providers::config::Command;
use ml_providers::utils::{logger, validation::Validate};
use ml_providers::{
    AuthorizationContext, CliConfig, GatedOperation, PolicyConfig, ProviderError,
    SharedServicesChecks,
};
use std::convert::Infallible;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    match config.command {
        Command::Operations => {
            print_operations();
            Ok(())
        }
        Command::Check {
            config: policy_path,
            user,
            roles,
            space,
            operation,
        } => {
            let operation: GatedOperation = match operation.parse() {
                Ok(operation) => operation,
                Err(e) => {
                    tracing::error!("❌ Operation parsing failed: {}", e);
                    tracing::error!("💡 Suggestion: run `ml-providers operations` for valid names");
                    eprintln!("❌ '{}' is not a gated operation", operation);
                    std::process::exit(2);
                }
            };

            let checks = match load_checks(&policy_path) {
                Ok(checks) => checks,
                Err(e) => {
                    tracing::error!("❌ Policy loading failed: {}", e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
            };

            let mut context = AuthorizationContext {
                username: user,
                roles,
                ..Default::default()
            };
            if let Some(space) = space {
                context = context.with_space(space);
            }

            let guard = checks.guard_for(&context);

            match guard.authorize::<Infallible>(operation).await {
                Ok(()) => {
                    println!("✅ {} allowed for {}", operation, context.display_user());
                    Ok(())
                }
                Err(e @ ProviderError::License(_)) | Err(e @ ProviderError::Capability(_)) => {
                    println!("⛔ {} denied for {}: {}", operation, context.display_user(), e);
                    std::process::exit(1);
                }
                Err(ProviderError::Delegate(never)) => match never {},
            }
        }
    }
}

fn load_checks(path: &str) -> ml_providers::Result<SharedServicesChecks> {
    ml_providers::utils::validation::validate_path("config", path)?;
    let policy = PolicyConfig::from_file(path)?;
    policy.validate()?;
    let checks = SharedServicesChecks::from_policy(&policy)?;
    tracing::debug!(path = %path, roles = policy.roles.len(), "Loaded ML access policy");
    Ok(checks)
}

fn print_operations() {
    for operation in GatedOperation::ALL {
        let capabilities: Vec<&str> = operation
            .required_capabilities()
            .iter()
            .map(|c| c.as_str())
            .collect();
        println!(
            "{:<24} -> {:<24} [{}]",
            operation.name(),
            operation.delegate_name(),
            capabilities.join(", ")
        );
    }
}
