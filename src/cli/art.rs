//! ASCII artwork for each phase.

use crate::light::color::Color;

const HOUSING_TOP: &str = "         .----'-'----.";
const HOUSING_BOTTOM: &str = "         '-._______.-'";
const LAMP_RIM: &str = "         |   .===.   |";
const UNLIT: &str = "     ";

/// Text filling a lit lamp
#[must_use]
pub const fn lamp_fill(color: Color) -> &'static str {
    match color {
        Color::Red => "RRRRR",
        Color::Yellow => "YYYYY",
        Color::Green => "GGGGG",
    }
}

/// The full signal head with only `lit` switched on.
///
/// Lamps are stacked red, yellow, green from top to bottom. The picture starts
/// with an empty line so it sits below the cursor after a clear.
#[must_use]
pub fn artwork(lit: Color) -> String {
    let mut lines = vec![String::new(), HOUSING_TOP.to_string()];
    for lamp in Color::ALL {
        let fill = if lamp == lit { lamp_fill(lamp) } else { UNLIT };
        lines.push(LAMP_RIM.to_string());
        lines.push(format!("         |  /{fill}\\  |"));
        lines.push(format!("         |  \\{fill}/  |"));
        lines.push(LAMP_RIM.to_string());
    }
    lines.push(HOUSING_BOTTOM.to_string());
    lines.join("\n")
}
