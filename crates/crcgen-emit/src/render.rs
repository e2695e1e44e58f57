use alloc::string::String;
use core::fmt::Write;

use crcgen_table::Table;

use crate::{EmitConfig, Lang};

const PER_LINE: usize = 8;

/// Render `table` as a complete source file for `config.lang`.
pub fn render(table: &Table, config: &EmitConfig) -> String {
    let mut out = String::with_capacity(2048);
    // Writing into a String cannot fail.
    let _ = match config.lang {
        Lang::Rust => render_rust(&mut out, table, config),
        Lang::Go => render_go(&mut out, table, config),
    };
    out
}

fn header(out: &mut String, config: &EmitConfig) -> core::fmt::Result {
    out.push_str("// Code generated by \"");
    // Control characters are escaped so the header stays a single comment line.
    for c in config.generated_by.chars() {
        if c.is_control() {
            write!(out, "{}", c.escape_default())?;
        } else {
            out.push(c);
        }
    }
    writeln!(out, "\"; DO NOT EDIT.")?;
    writeln!(out)
}

fn poly_comment(out: &mut String, indent: &str, table: &Table) -> core::fmt::Result {
    writeln!(
        out,
        "{}// Lookup table for {} calculation with polynomial {}.",
        indent,
        table.width(),
        table.polynomial()
    )
}

fn entries(out: &mut String, indent: &str, table: &Table) -> core::fmt::Result {
    let digits = table.width().hex_digits();
    for (i, entry) in table.iter().enumerate() {
        out.push_str(if i % PER_LINE == 0 { indent } else { " " });
        write!(out, "0x{:0digits$X},", entry, digits = digits)?;
        if (i + 1) % PER_LINE == 0 {
            out.push('\n');
        }
    }
    Ok(())
}

fn render_rust(out: &mut String, table: &Table, config: &EmitConfig) -> core::fmt::Result {
    let bits = table.width().bits();
    header(out, config)?;
    writeln!(out, "pub mod {} {{", config.package)?;
    poly_comment(out, "    ", table)?;
    writeln!(out, "    #[rustfmt::skip]")?;
    writeln!(out, "    pub static CRC{}_TABLE: [u{}; 256] = [", bits, bits)?;
    entries(out, "        ", table)?;
    writeln!(out, "    ];")?;
    writeln!(out, "}}")
}

fn render_go(out: &mut String, table: &Table, config: &EmitConfig) -> core::fmt::Result {
    let bits = table.width().bits();
    header(out, config)?;
    writeln!(out, "package {}", config.package)?;
    writeln!(out)?;
    poly_comment(out, "", table)?;
    writeln!(out, "var crc{}Table = []uint{}{{", bits, bits)?;
    entries(out, "\t", table)?;
    writeln!(out, "}}")
}
