use serde::{Deserialize, Serialize};

/// Self-reported programming experience chosen by the student.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Level {
    A,
    B,
    C,
}

impl Level {
    pub fn code(&self) -> &'static str {
        match self {
            Level::A => "A",
            Level::B => "B",
            Level::C => "C",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Level::A => "Nunca programei / quase nada",
            Level::B => "Já tive alguma disciplina / mexi um pouco",
            Level::C => "Programo com frequência / sou de Computação",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" | "beginner" => Some(Level::A),
            "b" | "intermediate" => Some(Level::B),
            "c" | "advanced" => Some(Level::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
