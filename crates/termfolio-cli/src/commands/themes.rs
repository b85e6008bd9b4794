use anyhow::Result;

use termfolio_tui::themes::available_themes;

pub fn run() -> Result<()> {
    println!("Available themes:\n");
    for name in available_themes() {
        println!("  {name}");
    }
    println!("\nSelect one with `termfolio -t <name>` or in config:");
    println!("  [ui]\n  theme = \"<name>\"");
    Ok(())
}
