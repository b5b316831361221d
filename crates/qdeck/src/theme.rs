use colored::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub heading: Color,
    pub body: Color,
    pub accent: Color,
    pub dim: Color,
    pub answer: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            heading: Color::White,
            body: Color::TrueColor { r: 0xC8, g: 0xC8, b: 0xC8 },
            accent: Color::TrueColor { r: 0x52, g: 0x94, b: 0xE2 }, // bright blue
            dim: Color::TrueColor { r: 0x80, g: 0x80, b: 0x80 },
            answer: Color::TrueColor { r: 0x5C, g: 0xDB, b: 0x95 }, // mint green
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            heading: Color::TrueColor { r: 0x16, g: 0x21, b: 0x3E },
            body: Color::TrueColor { r: 0x1A, g: 0x1A, b: 0x2E },
            accent: Color::TrueColor { r: 0x0F, g: 0x34, b: 0x60 }, // deep blue
            dim: Color::TrueColor { r: 0x6A, g: 0x6A, b: 0x6A },
            answer: Color::TrueColor { r: 0x1E, g: 0x8A, b: 0x5A }, // forest green
        }
    }

    /// Terminals are usually dark, so that is the fallback.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
