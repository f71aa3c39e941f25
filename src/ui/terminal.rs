//! Line-oriented terminal front end for the writing flow.
//!
//! Browse: `n` next, `p` previous, a number jumps, `s` selects, `r` fetches
//! new quotes. Describe: any text is the scene description, `:b` goes back.
//! View: `c` copies, `d` downloads, `o` starts over. `q` quits anywhere.
//!
//! In the single-page layout every section stays live: browse commands work
//! at any step, view commands work once a scene exists, and any other text
//! is the scene description.

use super::form::{quote_preview, PLACEHOLDER};
use super::viewer::{EMPTY_HINT, EMPTY_TEXT, GENERATING_TEXT};
use super::{Clipboard, Layout, SceneBackend, SceneDisplay, ScreenController, Section, Step};
use crate::Result;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Drive a [`ScreenController`] from `input` until `q` or end of input.
pub async fn run<R, W>(
    backend: &dyn SceneBackend,
    layout: Layout,
    input: R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
    download_dir: &Path,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut screen = ScreenController::new(layout);
    screen.load_quotes(backend).await;
    render(&screen, out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "q" || line == ":q" {
            break;
        }

        match (screen.layout(), screen.step()) {
            (Layout::SinglePage, _) => {
                let handled = browse_command(&mut screen, backend, line).await
                    || (screen.scene().is_some()
                        && view_command(&mut screen, line, out, clipboard, download_dir)?);
                if !handled {
                    describe_command(&mut screen, backend, line, out).await?;
                }
            }
            (Layout::Stepped, Step::Browse) => {
                browse_command(&mut screen, backend, line).await;
            }
            (Layout::Stepped, Step::Describe) => {
                describe_command(&mut screen, backend, line, out).await?;
            }
            (Layout::Stepped, Step::View) => {
                view_command(&mut screen, line, out, clipboard, download_dir)?;
            }
        }

        render(&screen, out)?;
    }

    Ok(())
}

/// Returns whether `line` was a browse command.
async fn browse_command(
    screen: &mut ScreenController,
    backend: &dyn SceneBackend,
    line: &str,
) -> bool {
    match line {
        "n" => screen.browser_mut().next_quote(),
        "p" => screen.browser_mut().previous_quote(),
        "s" => {
            screen.select_current();
        }
        "r" => {
            screen.load_quotes(backend).await;
        }
        other => match other.parse::<usize>() {
            Ok(position) => {
                screen.browser_mut().jump_to(position.saturating_sub(1));
            }
            Err(_) => return false,
        },
    }
    true
}

async fn describe_command<W: Write>(
    screen: &mut ScreenController,
    backend: &dyn SceneBackend,
    line: &str,
    out: &mut W,
) -> Result<()> {
    if line == ":b" {
        screen.start_over();
    } else if !line.is_empty() {
        screen.form_mut().set_prompt(line);
        if screen.form().can_submit(screen.selected(), screen.is_generating()) {
            writeln!(out, "{}", GENERATING_TEXT)?;
        }
        screen.generate(backend).await;
    }
    Ok(())
}

/// Returns whether `line` was a view command. A failed save is reported
/// inline and leaves the scene on screen.
fn view_command<W: Write>(
    screen: &mut ScreenController,
    line: &str,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
    download_dir: &Path,
) -> Result<bool> {
    match line {
        "c" => {
            if screen.viewer().copy(screen.scene(), clipboard) {
                writeln!(out, "Copied!")?;
            }
        }
        "d" => match screen.viewer().download(screen.scene(), download_dir) {
            Ok(Some(path)) => writeln!(out, "Saved {}", path.display())?,
            Ok(None) => {}
            Err(e) => {
                warn!("Failed to save scene: {}", e);
                writeln!(out, "! Could not save the scene: {}", e)?;
            }
        },
        "o" => screen.start_over(),
        _ => return Ok(false),
    }
    Ok(true)
}

fn render<W: Write>(screen: &ScreenController, out: &mut W) -> Result<()> {
    for section in screen.visible_sections() {
        match section {
            Section::Quotes => render_quotes(screen, out)?,
            Section::Form => render_form(screen, out)?,
            Section::Scene => render_scene(screen, out)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn render_quotes<W: Write>(screen: &ScreenController, out: &mut W) -> Result<()> {
    let browser = screen.browser();
    writeln!(out, "\n== Find Your Inspiration ==")?;

    let Some(quote) = browser.current() else {
        writeln!(out, "No quotes available. [r] try again")?;
        return Ok(());
    };

    writeln!(out, "({}/{})", browser.index() + 1, browser.len())?;
    writeln!(out, "\"{}\"", quote.text)?;
    writeln!(out, "  \u{2014} {}", quote.author)?;
    if browser.is_current_selected(screen.selected()) {
        writeln!(out, "\u{2713} Selected")?;
    }
    writeln!(out, "[n]ext [p]rev [1-{}] jump [s]elect [r]efresh [q]uit", browser.len())?;
    Ok(())
}

fn render_form<W: Write>(screen: &ScreenController, out: &mut W) -> Result<()> {
    let form = screen.form();
    writeln!(out, "\n== Describe Your Scene ==")?;
    if let Some(quote) = screen.selected() {
        writeln!(out, "Using quote: {}", quote_preview(quote))?;
    }
    if form.prompt().is_empty() {
        writeln!(out, "e.g. {}", PLACEHOLDER)?;
    } else {
        writeln!(out, "{} ({})", form.prompt(), form.counter_label())?;
    }
    if let Some(error) = form.error() {
        writeln!(out, "! {}", error)?;
    }
    if screen.layout() == Layout::Stepped {
        writeln!(out, "Type a description and press enter, or :b to go back")?;
    }
    Ok(())
}

fn render_scene<W: Write>(screen: &ScreenController, out: &mut W) -> Result<()> {
    writeln!(out, "\n== Your Scene ==")?;
    match screen.scene_display() {
        SceneDisplay::Generating => writeln!(out, "{}", GENERATING_TEXT)?,
        SceneDisplay::Empty => {
            writeln!(out, "{}", EMPTY_TEXT)?;
            writeln!(out, "{}", EMPTY_HINT)?;
        }
        SceneDisplay::Scene(scene) => {
            writeln!(out, "{}", scene)?;
            writeln!(out, "[c]opy [d]ownload [o] start over [q]uit")?;
        }
    }
    Ok(())
}
