use clap::Parser;

use seqprobe::cli::{Cli, Command};
use seqprobe::infra::config::Config;
use seqprobe::ui::app::App;

fn main() -> anyhow::Result<()> {
    seqprobe::init();

    let cli = Cli::parse();
    if let Some(Command::Completions { shell }) = cli.command {
        seqprobe::cli::print_completions(shell);
        return Ok(());
    }

    let config = Config::load()?;
    let mut app = App::new(config, cli.format);
    let sequence = (!cli.sequence.is_empty()).then_some(cli.sequence);
    app.run(sequence, cli.target)
}
