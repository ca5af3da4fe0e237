use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use headless::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("pagination.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = PaginationConfig::new().sibling_count(1).boundary_count(1);
    let pagination = Pagination::with_config(20, config)?;

    terminal::enable_raw_mode()?;
    let result = run(&pagination);
    terminal::disable_raw_mode()?;
    Ok(result?)
}

fn run(pagination: &Pagination) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "Left/Right/Home/End to change page, q to quit\r\n")?;
    render(&mut out, pagination)?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        if key_event.code == KeyCode::Char('q') {
            return Ok(());
        }

        if pagination.on_key(&KeyCombo::from(key_event)).is_handled() && pagination.is_dirty() {
            pagination.clear_dirty();
            render(&mut out, pagination)?;
        }
    }
}

fn render(out: &mut impl Write, pagination: &Pagination) -> io::Result<()> {
    let current = pagination.page();
    let items: Vec<String> = pagination
        .items()
        .into_iter()
        .map(|item| match item {
            PaginationItem::Page(page) if page == current => format!("[{page}]"),
            other => other.to_string(),
        })
        .collect();
    write!(out, "{}\r\n", items.join(" "))?;
    out.flush()
}
