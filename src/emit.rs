//! Rendering of enumerated polyominoes into static tables.

use std::io::Write;

use serde::Serialize;

use crate::polyomino::Polyomino;

/// The output formats a [`Table`] can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A feature-gated Rust module with a `POLYOMINOS` constant.
    Rust,
    /// A JSON document.
    Json,
    /// Every polyomino drawn as ASCII art.
    Ascii,
}

const DEFAULT_NAMES: [&str; 8] = [
    "triominos",
    "tetrominos",
    "pentominos",
    "hexominos",
    "heptominos",
    "octominos",
    "nonominos",
    "decominos",
];

/// The sizes for which a default table name exists.
pub const NAMED_SIZES: std::ops::RangeInclusive<usize> = 3..=10;

/// The conventional name for the table of polyominoes of size `n`, if
/// there is one.
pub fn default_name(n: usize) -> Option<&'static str> {
    n.checked_sub(*NAMED_SIZES.start())
        .and_then(|i| DEFAULT_NAMES.get(i))
        .copied()
}

/// The name for the table of polyominoes of size `n`, falling back to
/// `polyominos_{n}` when there is no conventional name.
pub fn table_name(n: usize) -> String {
    default_name(n)
        .map(str::to_string)
        .unwrap_or_else(|| format!("polyominos_{n}"))
}

/// A named table of all polyominoes of size `n`.
#[derive(Debug, Clone, Serialize)]
pub struct Table<'a> {
    pub name: &'a str,
    pub n: usize,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ang_force: Option<f32>,
    pub polyominoes: &'a [Polyomino],
}

impl<'a> Table<'a> {
    pub fn new(name: &'a str, n: usize, polyominoes: &'a [Polyomino]) -> Self {
        Self {
            name,
            n,
            count: polyominoes.len(),
            force: None,
            ang_force: None,
            polyominoes,
        }
    }

    /// Set the movement and rotation force constants. Forces that are
    /// `None` are written as a `TODO` placeholder in the Rust output.
    pub fn with_forces(mut self, force: Option<f32>, ang_force: Option<f32>) -> Self {
        self.force = force;
        self.ang_force = ang_force;
        self
    }

    /// Write this table in `format`.
    pub fn write(&self, format: Format, write: impl Write) -> std::io::Result<()> {
        match format {
            Format::Rust => self.write_rust(write),
            Format::Json => self.write_json(write),
            Format::Ascii => self.write_ascii(write),
        }
    }

    fn write_rust(&self, mut w: impl Write) -> std::io::Result<()> {
        let name = self.name;
        let constant = |v: Option<f32>| v.map(|v| format!("{v:?}")).unwrap_or("TODO".to_string());

        writeln!(w, "    #[cfg(feature=\"{name}\")]")?;
        writeln!(w, "    pub use self::{name}::*;")?;
        writeln!(w, "    #[cfg(feature=\"{name}\")]")?;
        writeln!(w, "    mod {name} {{")?;
        writeln!(
            w,
            "        pub const POLYOMINO_FORCE: f32 = {};",
            constant(self.force)
        )?;
        writeln!(
            w,
            "        pub const POLYOMINO_ANG_FORCE: f32 = {};",
            constant(self.ang_force)
        )?;
        writeln!(
            w,
            "        pub const POLYOMINOS: [[[usize; 2]; {}]; {}] = [",
            self.n, self.count
        )?;

        for poly in self.polyominoes {
            let cells: Vec<_> = poly
                .cells()
                .iter()
                .map(|c| format!("[{}, {}]", c.x, c.y))
                .collect();
            writeln!(w, "            [{}],", cells.join(", "))?;
        }

        writeln!(w, "        ];")?;
        writeln!(w, "    }}")?;
        writeln!(w)?;

        Ok(())
    }

    fn write_json(&self, mut w: impl Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)
    }

    fn write_ascii(&self, mut w: impl Write) -> std::io::Result<()> {
        writeln!(w, "{}: {} polyominoes of size {}", self.name, self.count, self.n)?;

        for (idx, poly) in self.polyominoes.iter().enumerate() {
            let cells: Vec<_> = poly
                .cells()
                .iter()
                .map(|c| format!("({}, {})", c.x, c.y))
                .collect();

            writeln!(w)?;
            writeln!(w, "Poly {idx}: {}", cells.join(", "))?;
            writeln!(w, "{poly}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate;

    fn render(table: &Table, format: Format) -> String {
        let mut out = Vec::new();
        table.write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    pub fn names() {
        assert_eq!(default_name(3), Some("triominos"));
        assert_eq!(default_name(10), Some("decominos"));
        assert_eq!(default_name(2), None);
        assert_eq!(default_name(11), None);
        assert_eq!(table_name(12), "polyominos_12");
    }

    #[test]
    pub fn rust_table_layout() {
        let shapes = enumerate(3).unwrap();
        let table = Table::new("triominos", 3, &shapes);

        let expected = r#"    #[cfg(feature="triominos")]
    pub use self::triominos::*;
    #[cfg(feature="triominos")]
    mod triominos {
        pub const POLYOMINO_FORCE: f32 = TODO;
        pub const POLYOMINO_ANG_FORCE: f32 = TODO;
        pub const POLYOMINOS: [[[usize; 2]; 3]; 2] = [
            [[0, 0], [0, 1], [0, 2]],
            [[0, 0], [0, 1], [1, 0]],
        ];
    }

"#;

        assert_eq!(render(&table, Format::Rust), expected);
    }

    #[test]
    pub fn rust_table_with_forces() {
        let shapes = enumerate(2).unwrap();
        let table = Table::new("dominos", 2, &shapes).with_forces(Some(0.16), Some(1.0));
        let out = render(&table, Format::Rust);

        assert!(out.contains("pub const POLYOMINO_FORCE: f32 = 0.16;"));
        assert!(out.contains("pub const POLYOMINO_ANG_FORCE: f32 = 1.0;"));
        assert!(out.contains("[[[usize; 2]; 2]; 1]"));
    }

    #[test]
    pub fn json_table() {
        let shapes = enumerate(3).unwrap();
        let table = Table::new("triominos", 3, &shapes);
        let out = render(&table, Format::Json);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "triominos");
        assert_eq!(value["n"], 3);
        assert_eq!(value["count"], 2);
        assert!(value.get("force").is_none());
        assert_eq!(
            value["polyominoes"],
            serde_json::json!([[[0, 0], [0, 1], [0, 2]], [[0, 0], [0, 1], [1, 0]]])
        );
    }

    #[test]
    pub fn ascii_table() {
        let shapes = enumerate(3).unwrap();
        let table = Table::new("triominos", 3, &shapes);

        let expected = "triominos: 2 polyominoes of size 3\n\
            \n\
            Poly 0: (0, 0), (0, 1), (0, 2)\n\
            #\n#\n#\n\
            \n\
            Poly 1: (0, 0), (0, 1), (1, 0)\n\
            ##\n# \n";

        assert_eq!(render(&table, Format::Ascii), expected);
    }
}
