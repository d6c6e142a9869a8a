use std::fs::File;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use tree_select::render::Palette;
use tree_select_demo::config::USAGE;
use tree_select_demo::terminal::Terminal;
use tree_select_demo::{DemoConfig, DemoError, ExampleForm, HostAction, paths};

fn main() {
    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    if config.show_help {
        println!("{}", USAGE);
        return;
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &DemoConfig) -> Result<(), DemoError> {
    let Some(log_path) = config.log_file() else {
        return Ok(());
    };
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)?;
        if config.log_path.is_none() {
            paths::rotate_logs(dir);
        }
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&log_path)?)?;
    log::info!("Logging to {}", log_path.display());
    Ok(())
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let items = config.load_tree()?;
    let mut form = ExampleForm::new(items);
    let palette = Palette::default();
    let mut terminal = Terminal::new()?;

    loop {
        terminal.draw(|buf| form.render(buf, &palette))?;

        for event in terminal.poll(None)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if form.handle_key(key.into()) == HostAction::Quit {
                        log::info!("Quit");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    form.handle_click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
    }
}
