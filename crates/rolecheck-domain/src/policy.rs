/// How strictly a role policy is judged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Only structural absence and wildcard resources fail; never returns an error.
    #[default]
    Lenient,
    /// Every check runs in order and the first schema violation is returned as an error.
    Robust,
}

impl Mode {
    /// Map the `robust` flag of the command line contract.
    pub fn from_robust(robust: bool) -> Self {
        if robust { Mode::Robust } else { Mode::Lenient }
    }

    pub fn is_robust(self) -> bool {
        self == Mode::Robust
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Lenient => "lenient",
            Mode::Robust => "robust",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
