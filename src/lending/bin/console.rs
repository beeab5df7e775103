use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use lending_library::core::domain::Configuration;
use lending_library::gateway::factory::create_publisher;
use lending_library::lending::console::{ConsoleRequest, dispatch, HELP};
use lending_library::lending::factory::{create_lending_service, load_library};
use lending_library::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env("console");
    let library = load_library(&config)?;
    let svc = create_lending_service(&config, library, create_publisher(&config));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout.write_all(format!("{}\n> ", HELP).as_bytes()).await?;
    stdout.flush().await?;
    while let Some(line) = lines.next_line().await? {
        let (reply, quit) = match ConsoleRequest::parse(&line) {
            Ok(req) => (dispatch(svc.as_ref(), &req).await, req.is_quit()),
            Err(err) => (Err(err), false),
        };
        let text = match reply {
            Ok(text) => text,
            Err(err) => err.to_string(),
        };
        stdout.write_all(format!("{}\n", text.trim_end()).as_bytes()).await?;
        if quit {
            break;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }
    stdout.flush().await?;
    Ok(())
}
