//! Document model: sections of functions, each a list of formatted fragments.

/// One unit of already-formatted Markdown, usually a full line with its
/// trailing newline.
pub type Fragment = String;

/// The whole converted manual, in order of first encounter.
#[derive(Debug, Default)]
pub struct Document {
    pub sections: Vec<Section>,
}

#[derive(Debug, Default)]
pub struct Section {
    pub title: String,
    /// 1-based input line of the section header
    pub line: usize,
    /// Heading and introductory prose before the first function.
    pub intro: Vec<Fragment>,
    pub functions: Vec<FunctionEntry>,
}

#[derive(Debug, Default)]
pub struct FunctionEntry {
    /// Header text exactly as it appears in the manual
    pub name: String,
    pub fragments: Vec<Fragment>,
}

impl Document {
    /// Open a section for `title` and return its index. A repeated title
    /// resets the existing section in place so it keeps its first-encounter
    /// position.
    pub fn open_section(&mut self, title: &str, line: usize) -> usize {
        match self.sections.iter().position(|s| s.title == title) {
            Some(idx) => {
                self.sections[idx] = Section {
                    title: title.to_string(),
                    line,
                    ..Section::default()
                };
                idx
            }
            None => {
                self.sections.push(Section {
                    title: title.to_string(),
                    line,
                    ..Section::default()
                });
                self.sections.len() - 1
            }
        }
    }
}

impl Section {
    /// Open a function entry; a repeated name is reset in place.
    pub fn open_function(&mut self, name: &str) -> &mut FunctionEntry {
        let idx = match self.functions.iter().position(|f| f.name == name) {
            Some(idx) => {
                self.functions[idx].fragments.clear();
                idx
            }
            None => {
                self.functions.push(FunctionEntry {
                    name: name.to_string(),
                    fragments: Vec::new(),
                });
                self.functions.len() - 1
            }
        };
        &mut self.functions[idx]
    }

    /// All fragments, intro first, then functions in encounter order.
    pub fn fragments_mut(&mut self) -> impl Iterator<Item = &mut Fragment> {
        self.intro
            .iter_mut()
            .chain(self.functions.iter_mut().flat_map(|f| f.fragments.iter_mut()))
    }
}
