pub mod cli;
pub mod config;
pub mod credentials;
mod error;
pub mod monitor;
pub mod notify;
pub mod raise3d;
pub mod report;

pub use error::{Error, Result};

use anyhow::Context;

use cli::{Cli, Command};
use credentials::{Credentials, Prompt, Static};
use notify::alertzy;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut conf = config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let printer = cli.command.printer();
    let credentials: Box<dyn Credentials> = match printer
        .password
        .clone()
        .or_else(|| conf.printer.password.take())
    {
        Some(password) => Box::new(Static(password)),
        None => Box::new(Prompt),
    };
    let password = credentials.password().context("failed to read password")?;

    if matches!(cli.command, Command::Monitor(_)) {
        tracing::info!("monitoring printer at address: {}", printer.addr);
    }

    let client = raise3d::Client::builder(&printer.addr, password)
        .config(&conf.printer)
        .await
        .with_context(|| format!("failed to log in to {}", printer.addr))?;

    match cli.command {
        Command::Info(_) => {
            let info = client.fetch_system_information().await?;
            print!("{}", report::info(&info));
        }
        Command::Job(_) => {
            let job = client.fetch_job_information().await?;
            print!("{}", report::job(&job));
        }
        Command::Status(_) => {
            let status = client.fetch_running_status().await?;
            let basic = client.fetch_basic_information().await?;
            print!("{}", report::status(&status, &basic));
        }
        Command::Monitor(args) => {
            if let Some(interval) = args.interval {
                conf.monitor.interval = interval;
            }
            let alertzy = match args.notify {
                Some(key) => Some(alertzy::Client::from_config(&alertzy::Config {
                    key,
                    url: conf.alertzy.and_then(|alertzy| alertzy.url),
                })),
                None => conf.alertzy.as_ref().map(alertzy::Client::from_config),
            };

            let mut service = monitor::Service::new(client, &conf.monitor);
            if let Some(alertzy) = alertzy {
                service = service.notifier(alertzy);
            }
            service
                .run(async {
                    if let Err(err) = tokio::signal::ctrl_c().await {
                        tracing::error!("failed to listen for ctrl-c: {}", err);
                        std::future::pending::<()>().await;
                    }
                })
                .await;
        }
    }

    Ok(())
}
