mod app;
mod cli;
mod config;
mod library;
mod rename;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
