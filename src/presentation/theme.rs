use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub code: fn(&str) -> String,
    pub name: fn(&str) -> String,
    pub result: fn(&str) -> String,
    pub alert: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            code: |s| s.cyan().to_string(),
            name: |s| s.white().to_string(),
            result: |s| s.yellow().to_string(),
            alert: |s| s.red().bold().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            code: |s| s.green().italic().to_string(),
            name: |s| s.bright_white().to_string(),
            result: |s| s.bright_white().to_string(),
            alert: |s| s.red().italic().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            line: |s| s.to_string(),
            code: |s| s.to_string(),
            name: |s| s.to_string(),
            result: |s| s.to_string(),
            alert: |s| s.to_string(),
        }
    }
}
