use lp_time::commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = Cli::menu().await;
    std::process::exit(code);
}
