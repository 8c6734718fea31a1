//! Interactive terminal presenter.
//!
//! Each terminal cell shows two stacked canvas samples using the upper
//! half-block glyph: foreground is the top sample, background the bottom.
//! Only cells that changed since the last frame are rewritten.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use spheroid_common::{Color, Result};
use spheroid_renderer::{FrameTimer, PixelCanvas};
use tracing::{debug, info};

use crate::app::{App, Flow};
use crate::controls::{map_key, HELP};

const UPPER_HALF: char = '▀';
/// Rows kept below the picture for the status and help lines.
const FOOTER_ROWS: u16 = 2;
const MIN_COLS: u16 = 16;
const MIN_ROWS: u16 = FOOTER_ROWS + 4;
/// Longest simulated step, so a stalled terminal does not jump the orbit.
const MAX_STEP: f64 = 0.1;

/// Two vertically stacked samples shown in one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HalfBlock {
    pub top: Color,
    pub bottom: Color,
}

/// Restores the terminal when dropped, even on early return.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        terminal::enable_raw_mode()?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive loop until the user quits.
pub fn run(app: &mut App) -> Result<()> {
    let fps = app.config().display.fps;
    let cell_pixels = app.config().display.cell_pixels.max(1);
    let mut timer = FrameTimer::new(fps);
    let mut guard = TerminalGuard::enter()?;
    let out = &mut guard.out;

    let mut canvas = PixelCanvas::new(1, 1);
    let mut prev: Vec<HalfBlock> = Vec::new();
    let mut prev_size = (0, 0);
    info!(fps, cell_pixels, "terminal session started");

    loop {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    if app.handle(action) == Flow::Quit {
                        info!(frames = timer.frame_count(), "terminal session ended");
                        return Ok(());
                    }
                }
            }
        }

        let dt = timer.tick().as_secs_f64().min(MAX_STEP);
        app.advance(dt);

        // Re-read every frame so resizes take effect on the next draw.
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            queue!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0),
                Print("Terminal too small.")
            )?;
            out.flush()?;
            prev_size = (0, 0);
            timer.wait();
            continue;
        }

        let picture_rows = rows - FOOTER_ROWS;
        if (cols, rows) != prev_size {
            debug!(cols, rows, "terminal resized");
            prev_size = (cols, rows);
            prev.clear();
            queue!(out, terminal::Clear(terminal::ClearType::All))?;
        }
        canvas.resize(
            u32::from(cols) * cell_pixels,
            u32::from(picture_rows) * 2 * cell_pixels,
        );

        app.render(&mut canvas)?;
        let cells = sample_cells(&canvas, cols, picture_rows, cell_pixels);
        draw_cells(out, cols, &mut prev, &cells)?;
        draw_footer(out, cols, picture_rows, &app.status_line(timer.fps()))?;
        out.flush()?;

        timer.wait();
    }
}

/// Sample the canvas at the center of each half cell.
pub(crate) fn sample_cells(canvas: &PixelCanvas, cols: u16, rows: u16, cell_pixels: u32) -> Vec<HalfBlock> {
    let half = cell_pixels / 2;
    let sample = |x: u32, y: u32| canvas.pixel(x, y).unwrap_or(Color::BLACK);
    let mut cells = Vec::with_capacity(usize::from(cols) * usize::from(rows));
    for row in 0..u32::from(rows) {
        for col in 0..u32::from(cols) {
            let x = col * cell_pixels + half;
            cells.push(HalfBlock {
                top: sample(x, 2 * row * cell_pixels + half),
                bottom: sample(x, (2 * row + 1) * cell_pixels + half),
            });
        }
    }
    cells
}

fn to_term(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn draw_cells(out: &mut Stdout, cols: u16, prev: &mut Vec<HalfBlock>, cur: &[HalfBlock]) -> io::Result<()> {
    let width = usize::from(cols);
    let fresh = prev.len() != cur.len();
    if fresh {
        prev.clear();
        prev.extend_from_slice(cur);
    }
    for (i, cell) in cur.iter().enumerate() {
        if !fresh && prev[i] == *cell {
            continue;
        }
        prev[i] = *cell;
        queue!(
            out,
            cursor::MoveTo((i % width) as u16, (i / width) as u16),
            SetForegroundColor(to_term(cell.top)),
            SetBackgroundColor(to_term(cell.bottom)),
            Print(UPPER_HALF)
        )?;
    }
    queue!(out, ResetColor)
}

fn draw_footer(out: &mut Stdout, cols: u16, first_row: u16, status: &str) -> io::Result<()> {
    for (offset, text) in [status, HELP].into_iter().enumerate() {
        queue!(
            out,
            cursor::MoveTo(0, first_row + offset as u16),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(fit(text, usize::from(cols)))
        )?;
    }
    Ok(())
}

/// Truncate to `width` characters.
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
