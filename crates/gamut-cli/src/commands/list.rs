//! Catalog listing command.

use anyhow::Result;
use gamut_primaries::{GAMUTS, WHITE_POINTS};
use std::fmt::Write;

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Reference gamuts:");
    for g in &GAMUTS {
        let [r, gr, b] = g.primaries;
        let _ = writeln!(
            out,
            "  {:<20} R({:.4}, {:.4})  G({:.4}, {:.4})  B({:.4}, {:.4})  area {:.5}",
            g.name,
            r.x,
            r.y,
            gr.x,
            gr.y,
            b.x,
            b.y,
            g.polygon().area()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "White points:");
    for w in &WHITE_POINTS {
        let _ = writeln!(out, "  {:<9} ({:.5}, {:.5})  {:>5}K", w.name, w.xy.x, w.xy.y, w.cct);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_everything() {
        let text = render();
        for g in &GAMUTS {
            assert!(text.contains(g.name), "{}", g.name);
        }
        assert!(text.contains("D65       (0.31271, 0.32902)   6504K"));
        assert!(text.contains("LED-RGB1"));
    }
}
