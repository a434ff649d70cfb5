//! Word-diff to Markdown renderer
//!
//! Turns `git diff --word-diff=porcelain` output into one Markdown section per
//! changed file: a `###` heading, a `bash` fence holding the `diff --git` line,
//! and a `diff` fence holding the hunks.
//!
//! Porcelain word diffs put every word-level change on its own line, so a single
//! source line is spread over several output lines (context, `-`, `+`, context)
//! terminated by a `~` line. We keep those pieces together as an alignment group,
//! pad them to a common column and join them with `\` continuations so the reader
//! can still see which pieces formed one line.
//!
//! Rendering never fails. Lines we don't recognise are passed through with a
//! `! ` marker.

use super::width;

/// Appended to a group line that ended a source line (`~` followed it)
pub const FORCED_BREAK: &str = "\t\\n\n";
/// Appended to a group line that continues on the next line of the group
pub const CONTINUATION: &str = "\t\\\n";
/// Appended to the last line of a group
pub const NEWLINE: &str = "\n";

const FENCE_CLOSE: &str = "\n```\n\n";

/// Options for the diff renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
  /// Column step (in display units) that group widths are rounded up to
  pub indent_width: u32,
}

impl Default for DiffOptions {
  fn default() -> Self {
    Self { indent_width: 8 }
  }
}

/// Role of a classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
  /// Structural or standalone line, emitted as-is
  Basic,
  /// Context directly before a change
  Prefix,
  /// Added or removed words
  Change,
  /// Context directly after a change
  Suffix,
}

/// One output line and how it joins the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
  pub kind: LineKind,
  pub text: String,
  pub forces_newline_break: bool,
}

impl ClassifiedLine {
  fn new(kind: LineKind, text: impl Into<String>) -> Self {
    Self {
      kind,
      text: text.into(),
      forces_newline_break: false,
    }
  }

  fn basic(text: impl Into<String>) -> Self {
    Self::new(LineKind::Basic, text)
  }

  /// True for lines that take part in an alignment group
  pub fn is_grouped(&self) -> bool {
    self.kind != LineKind::Basic
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
  /// Before the first `diff --git`
  None,
  /// File header (`index`, `---`, `+++`)
  Diff,
  /// Hunk body
  Content,
}

fn is_change(line: &str) -> bool {
  line.starts_with('+') || line.starts_with('-')
}

/// Destination path of a `diff --git a/X b/Y` line
fn destination_path(header: &str) -> &str {
  header
    .rsplit_once(" b/")
    .map(|(_, path)| path)
    .or_else(|| header.split(' ').nth(3))
    .unwrap_or_default()
}

fn file_header(line: &str) -> String {
  format!(
    "\n### {}\n\n```bash\n{}\n```\n\n```diff",
    destination_path(line),
    line
  )
}

/// Classify every line of a word diff
///
/// `\r` is stripped first, so CRLF input behaves like LF input. The result is
/// the same for the same input; nothing outside the call is touched.
pub fn classify(raw: &str) -> Vec<ClassifiedLine> {
  let normalized = raw.replace('\r', "");
  let lines: Vec<&str> = normalized.split('\n').collect();

  let mut classified: Vec<ClassifiedLine> = Vec::with_capacity(lines.len());
  let mut section = Section::None;
  let mut fence_open = false;

  for (i, &line) in lines.iter().enumerate() {
    if line.starts_with("diff --git") {
      let mut header = String::new();
      if fence_open {
        header.push_str(FENCE_CLOSE);
      }
      header.push_str(&file_header(line));
      classified.push(ClassifiedLine::basic(header));
      section = Section::Diff;
      fence_open = true;
      continue;
    }

    if section == Section::Diff
      && (line.starts_with("index ") || line.starts_with("--- ") || line.starts_with("+++ "))
    {
      classified.push(ClassifiedLine::basic(line));
      continue;
    }

    if line.starts_with("@@ ") {
      section = Section::Content;
      classified.push(ClassifiedLine::basic(line));
      continue;
    }

    if line.is_empty() {
      classified.push(ClassifiedLine::basic(""));
      continue;
    }

    if section != Section::Content {
      classified.push(ClassifiedLine::basic(format!("! {}", line)));
      continue;
    }

    if line.starts_with(' ') {
      let next_is_change = lines.get(i + 1).is_some_and(|next| is_change(next));
      let after_change = classified.last().is_some_and(|prev| prev.kind == LineKind::Change);

      if next_is_change || after_change {
        // blank context inside a group carries nothing worth aligning
        if line.trim().is_empty() {
          continue;
        }
        let kind = if next_is_change { LineKind::Prefix } else { LineKind::Suffix };
        classified.push(ClassifiedLine::new(kind, line));
      } else {
        classified.push(ClassifiedLine::basic(format!("*{}", line)));
      }
      continue;
    }

    if is_change(line) {
      let (marker, rest) = line.split_at(1);
      classified.push(ClassifiedLine::new(LineKind::Change, format!("{} {}", marker, rest)));
      continue;
    }

    if line.starts_with('~') {
      if let Some(last) = classified.last_mut() {
        last.forces_newline_break = true;
      }
      continue;
    }

    classified.push(ClassifiedLine::basic(format!("! {}", line)));
  }

  if fence_open {
    classified.push(ClassifiedLine::basic(FENCE_CLOSE));
  }

  classified
}

/// A maximal run of consecutive grouped lines
#[derive(Debug, Clone, Copy)]
pub struct AlignmentGroup<'a> {
  lines: &'a [ClassifiedLine],
}

impl AlignmentGroup<'_> {
  /// Token appended after the line at `index`
  pub fn suffix_token(&self, index: usize) -> &'static str {
    if self.lines[index].forces_newline_break {
      FORCED_BREAK
    } else if index + 1 < self.lines.len() {
      CONTINUATION
    } else {
      NEWLINE
    }
  }

  /// Padded lines joined by their suffix tokens
  pub fn render(&self, options: &DiffOptions) -> String {
    let padded = width::pad_lines(self.lines.iter().map(|l| l.text.as_str()), options.indent_width);

    padded
      .iter()
      .enumerate()
      .fold(String::new(), |mut out, (i, line)| {
        out.push_str(line);
        out.push_str(self.suffix_token(i));
        out
      })
  }
}

/// A piece of the classified stream in output order
#[derive(Debug, Clone, Copy)]
pub enum Segment<'a> {
  Basic(&'a ClassifiedLine),
  Group(AlignmentGroup<'a>),
}

/// Split classified lines into basic lines and alignment groups, in order
pub fn segments(lines: &[ClassifiedLine]) -> Vec<Segment<'_>> {
  let mut out = Vec::new();
  let mut i = 0;

  while i < lines.len() {
    if !lines[i].is_grouped() {
      out.push(Segment::Basic(&lines[i]));
      i += 1;
      continue;
    }

    let start = i;
    while i < lines.len() && lines[i].is_grouped() {
      i += 1;
    }
    out.push(Segment::Group(AlignmentGroup { lines: &lines[start..i] }));
  }

  out
}

/// Render classified lines to Markdown
///
/// A blank line separates every group from the basic lines around it.
pub fn assemble(lines: &[ClassifiedLine], options: &DiffOptions) -> String {
  let segments = segments(lines);
  let mut out = String::new();

  for (i, segment) in segments.iter().enumerate() {
    match segment {
      Segment::Basic(line) => {
        out.push_str(&line.text);
        out.push('\n');
      }
      Segment::Group(group) => {
        out.push('\n');
        out.push_str(&group.render(options));
        if i + 1 < segments.len() {
          out.push('\n');
        }
      }
    }
  }

  out
}

/// Render a porcelain word diff as Markdown
pub fn render_diff_markdown(raw: &str, options: &DiffOptions) -> String {
  assemble(&classify(raw), options)
}
