// ============================================================
// Layer 6 — Progress Reporting
// ============================================================
// Terminal progress bars for the long loops (writing captions,
// normalising and writing images). Purely cosmetic: a bar never
// affects control flow, and a hidden bar is a no-op.

use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{msg:<28} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>6}/{len:6} ({eta})";

/// Create a bar for `len` steps labelled `label`.
/// When `visible` is false the bar draws nothing.
pub fn stage_bar(len: u64, label: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar.set_message(label.to_string());
    bar
}
