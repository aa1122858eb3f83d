use std::fmt;

use kornia_image::ImageSize;

use crate::params::WarpPerspectiveParams;

/// Selects the combinations matching a `(WIDTHxHEIGHT, INTER_MODE, BORDER_MODE)` pattern.
///
/// The flag names are kept verbatim, so a well formed filter naming a flag the
/// sweep does not use selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamFilter {
    /// Requested destination size, `None` when a dimension does not fit in `usize`.
    pub size: Option<ImageSize>,
    /// Requested interpolation flag, e.g. `INTER_LINEAR`.
    pub inter_type: String,
    /// Requested border flag, e.g. `BORDER_CONSTANT`.
    pub border_type: String,
}

impl ParamFilter {
    /// Find the first `(WIDTHxHEIGHT, INTER_*, BORDER_*)` occurrence in `text`.
    ///
    /// Only spaces are allowed after the commas. Returns `None` when the text
    /// holds no such occurrence.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_perf::filter::ParamFilter;
    ///
    /// let filter = ParamFilter::parse("--test_param_filter=(640x480, INTER_LINEAR,BORDER_CONSTANT)").unwrap();
    /// assert_eq!(filter.size.map(|s| s.width), Some(640));
    /// assert_eq!(filter.inter_type, "INTER_LINEAR");
    /// assert_eq!(filter.border_type, "BORDER_CONSTANT");
    ///
    /// assert!(ParamFilter::parse("(640x480, LINEAR, CONSTANT)").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        text.match_indices('(')
            .find_map(|(start, _)| Self::parse_group(&text[start + 1..]))
    }

    fn parse_group(s: &str) -> Option<Self> {
        let mut scanner = Scanner { rest: s };

        let width = scanner.digits()?;
        scanner.expect("x")?;
        let height = scanner.digits()?;
        scanner.expect(",")?;
        scanner.spaces();
        scanner.expect("INTER_")?;
        let inter = scanner.word()?;
        scanner.expect(",")?;
        scanner.spaces();
        scanner.expect("BORDER_")?;
        let border = scanner.word()?;
        scanner.expect(")")?;

        Some(Self {
            size: match (width.parse(), height.parse()) {
                (Ok(width), Ok(height)) => Some(ImageSize { width, height }),
                _ => None,
            },
            inter_type: format!("INTER_{inter}"),
            border_type: format!("BORDER_{border}"),
        })
    }

    /// Whether the combination matches the filter.
    pub fn matches(&self, params: &WarpPerspectiveParams) -> bool {
        self.size == Some(params.size)
            && params.inter_type.name() == self.inter_type
            && params.border_type.name() == self.border_type
    }

    /// The combinations matching the filter, in sweep order.
    pub fn select(&self, combinations: &[WarpPerspectiveParams]) -> Vec<WarpPerspectiveParams> {
        combinations
            .iter()
            .filter(|params| self.matches(params))
            .copied()
            .collect()
    }
}

impl fmt::Display for ParamFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "({size}, ")?,
            None => write!(f, "(<size out of range>, ")?,
        }
        write!(f, "{}, {})", self.inter_type, self.border_type)
    }
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn take_while(&mut self, f: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(|c: char| !f(c)).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        head
    }

    fn expect(&mut self, literal: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(literal)?;
        Some(())
    }

    fn spaces(&mut self) {
        self.take_while(|c| c == ' ');
    }

    fn digits(&mut self) -> Option<&'a str> {
        let digits = self.take_while(|c| c.is_ascii_digit());
        (!digits.is_empty()).then_some(digits)
    }

    fn word(&mut self) -> Option<&'a str> {
        let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        (!word.is_empty()).then_some(word)
    }
}

/// Pick the cases to run from an optional filter text.
///
/// A missing or malformed filter runs the whole sweep; a well formed one runs
/// only the matching combinations, possibly none.
pub fn select_cases(
    filter: Option<&str>,
    combinations: &[WarpPerspectiveParams],
) -> Vec<WarpPerspectiveParams> {
    match filter.and_then(ParamFilter::parse) {
        Some(filter) => {
            let selected = filter.select(combinations);
            if selected.is_empty() {
                log::warn!("filter {filter} does not match any warpPerspective case");
            }
            selected
        }
        None => {
            log::info!("no filter or getting invalid params, run all the cases");
            combinations.to_vec()
        }
    }
}
