// Wed Jan 21 2026 - Alex

use colored::*;

const WIDTH: usize = 56;

pub struct Banner {
    title: String,
    subtitle: String,
    version: String,
    use_color: bool,
}

impl Banner {
    pub fn default_banner() -> Self {
        Self {
            title: "CAESAR CRACKER".to_string(),
            subtitle: "Shift cipher cryptanalysis - French / English".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            use_color: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Framed title block, every line `WIDTH` columns wide.
    pub fn render(&self) -> String {
        let inner = WIDTH - 4;
        let edge = format!("+{}+", "-".repeat(WIDTH - 2));
        let title = format!("{:^inner$} v{}", self.title, self.version, inner = inner - self.version.len() - 2);
        let subtitle = format!("{:^inner$}", self.subtitle, inner = inner);

        let title = if self.use_color {
            title.cyan().bold().to_string()
        } else {
            title
        };

        [edge.clone(), format!("| {} |", title), format!("| {} |", subtitle), edge].join("\n")
    }

    pub fn print(&self) {
        println!("{}\n", self.render());
    }
}
