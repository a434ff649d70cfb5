//! Display-width heuristic and column padding for alignment groups
//!
//! Widths are approximated, not measured: anything up to U+00FF counts as one
//! unit, everything else (CJK, full-width Latin alike) as one and a half per
//! UTF-16 code unit, so characters outside the BMP such as emoji count three.
//! This roughly matches how GitHub lays out mixed CJK/Latin text in a diff
//! block. It is a known approximation and rendered output depends on it, so
//! don't swap it for `unicode-width`.
//!
//! Widths are kept in half-units so the arithmetic stays exact.

/// Half-units for a character in the printable ASCII/Latin-1 range
const NARROW: u32 = 2;
/// Half-units per UTF-16 code unit of any other character
const WIDE: u32 = 3;

/// Approximate rendered width of a line, in half-units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DisplayWidth(u32);

impl DisplayWidth {
  /// Measure a piece of text
  pub fn of(text: &str) -> Self {
    Self(
      text
        .chars()
        .map(|c| if (c as u32) <= 0xFF { NARROW } else { WIDE * c.len_utf16() as u32 })
        .sum(),
    )
  }

  #[cfg(test)]
  pub fn units(units: u32) -> Self {
    Self(units * NARROW)
  }

  /// Width in (possibly fractional) display units
  pub fn as_units(self) -> f64 {
    f64::from(self.0) / f64::from(NARROW)
  }

  /// Smallest multiple of `step` whole units that is >= this width
  pub fn round_up_to(self, step: u32) -> Self {
    let step = step.max(1).saturating_mul(NARROW);
    Self(self.0.div_ceil(step).saturating_mul(step))
  }

  /// Number of spaces needed to pad this width out to `target`
  ///
  /// A trailing half unit cannot be filled with a space and is left over.
  pub fn padding_to(self, target: DisplayWidth) -> usize {
    (target.0.saturating_sub(self.0) / NARROW) as usize
  }
}

/// Pad every line to the common column width of the group
///
/// The target is the widest line rounded up to the next multiple of
/// `indent_width` units. Lines keep their order.
pub fn pad_lines<'a, I>(lines: I, indent_width: u32) -> Vec<String>
where
  I: IntoIterator<Item = &'a str>,
{
  let measured: Vec<(&str, DisplayWidth)> = lines.into_iter().map(|l| (l, DisplayWidth::of(l))).collect();

  let target = measured
    .iter()
    .map(|(_, w)| *w)
    .max()
    .unwrap_or_default()
    .round_up_to(indent_width);

  measured
    .into_iter()
    .map(|(line, width)| {
      let mut padded = String::with_capacity(line.len() + width.padding_to(target));
      padded.push_str(line);
      padded.extend(std::iter::repeat_n(' ', width.padding_to(target)));
      padded
    })
    .collect()
}
