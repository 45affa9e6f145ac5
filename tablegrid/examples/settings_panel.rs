use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use simplelog::{Config, LevelFilter, WriteLogger};
use tablegrid::{PointerState, Rect, Table, TableConfig, DEFAULT_COLUMN_WIDTH};

const WORK_MAX: u32 = 20_000;
const WORK_STEP: u32 = 250;
const INPUT_WIDTH: f32 = 6.0;
const HEADERS: [&str; 3] = ["Item", "Work amount", "Yield amount"];

const CATALOGUE: &[(&str, u32, u32)] = &[
    ("Granite chunk", 250, 1),
    ("Steel", 5750, 35),
    ("Plasteel", 11500, 35),
    ("Jade", 6500, 20),
    ("Uranium", 7000, 20),
    ("Gold", 7250, 15),
    ("Silver", 4000, 60),
    ("Components", 9000, 4),
];

struct Drillable {
    label: &'static str,
    work: u32,
    yield_amount: u32,
}

fn defaults() -> Vec<Drillable> {
    CATALOGUE
        .iter()
        .take(6)
        .map(|&(label, work, yield_amount)| Drillable {
            label,
            work,
            yield_amount,
        })
        .collect()
}

fn main() -> io::Result<()> {
    let log_file = File::create("settings_panel.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    // Row 0 is the header; item i lives in row i + 1.
    let mut table = TableConfig::new(&[24.0, 28.0, 14.0])
        .origin(1.0, 2.0)
        .spacing(2.0, 0.0)
        .row_heights(&[1.0])
        .build();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut table);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout, table: &mut Table) -> io::Result<()> {
    let mut items = defaults();
    let mut pointer = PointerState::new();

    loop {
        draw(stdout, table, &items, &pointer)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let event = event::read()?;
        if pointer.handle(&event) {
            continue;
        }
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('a') => {
                let next = CATALOGUE
                    .iter()
                    .find(|(label, _, _)| items.iter().all(|item| item.label != *label));
                if let Some(&(label, work, yield_amount)) = next {
                    log::info!("[panel] adding {label}");
                    items.push(Drillable {
                        label,
                        work,
                        yield_amount,
                    });
                }
            }
            KeyCode::Char('d') => {
                if let Some(item) = items.pop() {
                    log::info!("[panel] removing {}", item.label);
                    table.remove_last_row();
                }
            }
            KeyCode::Char('r') => {
                while table.row_count() > 1 {
                    table.remove_last_row();
                }
                items = defaults();
                table.debug_dump();
            }
            KeyCode::Char('+') | KeyCode::Char('-') => {
                let hovered = table
                    .hovered_row(&pointer)
                    .and_then(|row| row.checked_sub(1))
                    .and_then(|index| items.get_mut(index));
                if let Some(item) = hovered {
                    item.work = if key.code == KeyCode::Char('+') {
                        (item.work + WORK_STEP).min(WORK_MAX)
                    } else {
                        item.work.saturating_sub(WORK_STEP).max(1)
                    };
                }
            }
            KeyCode::Char('w') | KeyCode::Char('n') => {
                let width = table.column_width(1).unwrap_or(DEFAULT_COLUMN_WIDTH);
                let delta = if key.code == KeyCode::Char('w') { 2.0 } else { -2.0 };
                // Narrowing to zero is rejected and logged by the table.
                table.set_column_width(1, width + delta);
                table.debug_dump();
            }
            _ => {}
        }
    }
}

fn draw(
    stdout: &mut io::Stdout,
    table: &mut Table,
    items: &[Drillable],
    pointer: &PointerState,
) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(1, 0),
        Print("a: add  d: remove  r: reset  +/-: work  w/n: resize  q: quit")
    )?;

    for (column, title) in HEADERS.iter().enumerate() {
        let rect = table.header_rect(column);
        put(stdout, rect, title, false)?;
    }

    for (index, item) in items.iter().enumerate() {
        let row = index + 1;
        let hovered = table.is_mouse_over_row(row, pointer);

        put(stdout, table.field_rect(0, row), item.label, hovered)?;

        let (input, slider) = table.field_rect(1, row).split_left(INPUT_WIDTH, 1.0);
        put(stdout, input, &item.work.to_string(), hovered)?;
        put(stdout, slider, &gauge(item.work, WORK_MAX, slider.width), hovered)?;

        put(stdout, table.field_rect(2, row), &item.yield_amount.to_string(), hovered)?;
    }

    stdout.flush()
}

fn put(stdout: &mut io::Stdout, rect: Rect, text: &str, highlight: bool) -> io::Result<()> {
    if rect.is_empty() {
        return Ok(());
    }
    let width = rect.width as usize;
    let text: String = text.chars().take(width).collect();

    queue!(stdout, cursor::MoveTo(rect.x as u16, rect.y as u16))?;
    if highlight {
        queue!(stdout, SetAttribute(Attribute::Reverse))?;
    }
    queue!(
        stdout,
        Print(format!("{text:<width$}")),
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}

fn gauge(value: u32, max: u32, width: f32) -> String {
    let cells = width.max(0.0) as usize;
    let filled = (value.min(max) as usize * cells) / max.max(1) as usize;
    "#".repeat(filled) + &"-".repeat(cells - filled)
}
