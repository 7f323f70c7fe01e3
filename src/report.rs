use std::io::{self, Write};

use crate::vision::model::LabelAnnotation;

pub const BANNER: &str = "########## Showing access to Vision API data ##########";
pub const HEADER: &str = "Labels (and confidence score):";
const SEPARATOR_WIDTH: usize = 30;

pub fn write_labels(out: &mut impl Write, labels: &[LabelAnnotation]) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    for label in labels {
        writeln!(out, "{} ({:.2}%)", label.description, label.score * 100.0)?;
    }
    Ok(())
}
