use crate::config::PrintOptions;

pub(crate) struct Ctx<'b> {
    pub(crate) options: &'b PrintOptions,
    pub(crate) indent_level: usize,
    pub(crate) output: String,
}

impl<'b> Ctx<'b> {
    pub(crate) fn new(options: &'b PrintOptions) -> Self {
        Self {
            options,
            indent_level: 0,
            output: String::new(),
        }
    }

    /// Write one line at the current indentation.
    pub(crate) fn line(&mut self, text: &str) {
        if self.options.use_tabs {
            self.output.extend((0..self.indent_level).map(|_| '\t'));
        } else {
            let width = self.indent_level * self.options.indent_width;
            self.output.extend((0..width).map(|_| ' '));
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(crate) fn nest_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent_level += 1;
        f(self);
        self.indent_level -= 1;
    }
}
