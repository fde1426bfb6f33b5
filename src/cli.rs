use diary::Cli;

fn main() -> anyhow::Result<()> {
    Cli::run()
}
