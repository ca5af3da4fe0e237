use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEventKind};
use crossterm::terminal;
use simplelog::{Config, LevelFilter, WriteLogger};
use uidom::{Element, Event, FocusState, FocusTrap};

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("focus_trap.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = ui();
    let mut focus = FocusState::new();
    focus.focus_first(&root);

    terminal::enable_raw_mode()?;
    let result = run(&root, &mut focus);
    terminal::disable_raw_mode()?;
    result
}

fn run(root: &Element, focus: &mut FocusState) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "Tab/Shift+Tab to move, o to open the dialog, Esc to close it, q to quit\r\n")?;
    status(&mut out, focus)?;

    loop {
        let raw = event::read()?;
        if let CtEvent::Key(key_event) = &raw
            && key_event.kind == KeyEventKind::Press
        {
            match key_event.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('o') if focus.active_trap().is_none() => {
                    focus.activate_trap(FocusTrap::new("dialog"), root);
                    status(&mut out, focus)?;
                    continue;
                }
                _ => {}
            }
        }

        for event in focus.process_events(&[raw], root) {
            if let Event::TrapReleased { container } = event {
                write!(out, "released {container}\r\n")?;
            }
        }
        status(&mut out, focus)?;
    }
}

fn status(out: &mut impl Write, focus: &FocusState) -> io::Result<()> {
    write!(
        out,
        "focused: {:<10} trap: {}\r\n",
        focus.focused().unwrap_or("-"),
        focus.active_trap().map(|t| t.container.as_str()).unwrap_or("-")
    )?;
    out.flush()
}

fn ui() -> Element {
    Element::box_()
        .id("root")
        .child(Element::button("Open dialog").id("open"))
        .child(Element::input("").id("search"))
        .child(
            Element::dialog()
                .id("dialog")
                .child(Element::input("").id("name"))
                .child(Element::button("Save").id("save"))
                .child(Element::button("Cancel").id("cancel")),
        )
}
