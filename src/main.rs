//! titan-fractal — Mandelbrot/Julia shading grids from the command line.
use clap::Parser; // trait import enables TitanCli::parse()
use colored::Colorize;

use titan_fractal::cli::{Command, TitanCli};
use titan_fractal::commands;
use titan_fractal::config::FractalConfig;
use titan_fractal::core::debug;
use titan_fractal::Fractal;

fn main() {
    let args = TitanCli::parse();
    if args.debug {
        debug::enable();
    }

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: TitanCli) -> anyhow::Result<()> {
    let cfg = FractalConfig::load(&args.config)?;

    match args.cmd {
        Some(Command::Mandelbrot { grid }) => commands::shade::main(Fractal::Mandelbrot, grid, &cfg),

        Some(Command::Julia { c, grid }) => {
            let c = c.unwrap_or_else(|| cfg.julia_c());
            commands::shade::main(Fractal::Julia { c }, grid, &cfg)
        }

        Some(Command::Escape { point, max_iter, julia_c }) => {
            commands::escape::main(point, max_iter, julia_c, &cfg)
        }

        Some(Command::ShowConfig) => commands::config::show(&cfg),

        None => {
            use clap::CommandFactory;
            TitanCli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
