//! unreal-locres - command-line front end for `locreslib`

mod cli;

fn main() -> anyhow::Result<()> {
    cli::run_cli()
}
