//! CLI entry point for hexchat-themer.

mod build_info;
mod cli;

use clap::Parser;
use hexchat_themer::config::load_config;
use hexchat_themer::logging;
use hexchat_themer::refresh::{refresh_themes, RefreshOptions};
use hexchat_themer::render::{RenderSink, Renderer};
use hexchat_themer::themes::ThemeRegistry;
use serde::Serialize;

fn main() {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // CLI overrides win over file and env values.
    if let Some(dir) = &args.dir {
        config.theme_dir = dir.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);

    let registry = match ThemeRegistry::with_overrides(&config.themes) {
        Ok(registry) => registry,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.list {
        let names = registry.names();
        if args.json {
            print_json(&renderer, &names);
        } else {
            for name in names {
                println!("{name}");
            }
        }
        return;
    }

    let options = RefreshOptions {
        theme_dir: config.theme_dir.clone(),
        forced_theme: args.theme.clone(),
        dry_run: args.dry_run,
    };
    match refresh_themes(&options, &registry, &renderer) {
        Ok(report) => {
            if args.json {
                print_json(&renderer, &report);
            }
        }
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(renderer: &Renderer, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            renderer.error(&format!("failed to serialize output: {e}"));
            std::process::exit(1);
        }
    }
}
