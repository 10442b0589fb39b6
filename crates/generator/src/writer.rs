use crate::config::Config;

/// Builds up the text of a header, line by line
pub(crate) struct SourceWriter<'config> {
  config: &'config Config,
  output: String,
  depth: usize,
}
impl<'config> SourceWriter<'config> {
  pub(crate) fn new(config: &'config Config) -> Self {
    Self {
      config,
      output: String::new(),
      depth: 0,
    }
  }

  /// Write a line at the current indentation. Empty lines have no indentation
  pub(crate) fn line(&mut self, text: impl AsRef<str>) {
    let text = text.as_ref();

    if !text.is_empty() {
      for _ in 0..self.depth {
        self.output.push_str(&self.config.indentation.to_string());
      }
      self.output.push_str(text);
    }
    self.output.push_str(self.config.line_ending.as_str());
  }

  /// Write an empty line
  pub(crate) fn blank(&mut self) {
    self.line("");
  }

  /// Write a line at an extra level of indentation, without starting a block
  pub(crate) fn continuation(&mut self, text: impl AsRef<str>) {
    self.indented(|writer| writer.indented(|writer| writer.line(text)));
  }

  /// Write the lines from `body` one level further in
  pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) {
    self.depth += 1;
    body(self);
    self.depth -= 1;
  }

  pub(crate) fn finish(self) -> String {
    self.output
  }
}

/// Something which can be written into a header
pub(crate) trait Emit {
  fn emit(&self, writer: &mut SourceWriter);
}
impl<T: Emit> Emit for [T] {
  fn emit(&self, writer: &mut SourceWriter) {
    for item in self {
      item.emit(writer);
    }
  }
}
