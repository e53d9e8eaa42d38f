//! Gesture script parsing.
//!
//! A script declares the scene first and then lists gesture events, one per
//! line. Blank lines and `#` comments are ignored.
//!
//! ```text
//! body 500 2000              # vertical offset and maximum
//! carousel gallery 300 1200  # named horizontal region
//!
//! down 100 100 gallery       # origin inside the gallery
//! move 140 102
//! up
//! down 0 0 @2                # contact 2, origin on plain body text
//! cancel @2
//! ```

use std::str::FromStr;

pub const DEFAULT_CONTACT: i32 = 1;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` expects {expected}")]
    Arity {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: `{value}` is not a number")]
    Number { line: usize, value: String },
    #[error("line {line}: carousel `{name}` is declared twice")]
    DuplicateRegion { line: usize, name: String },
    #[error("line {line}: no carousel named `{name}`")]
    UnknownRegion { line: usize, name: String },
    #[error("line {line}: `{command}` must come before the first gesture event")]
    LateDeclaration { line: usize, command: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDecl {
    pub offset: f32,
    pub max: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselDecl {
    pub name: String,
    pub scroll: ScrollDecl,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepKind {
    /// `region` names a carousel; `None` starts on plain body content.
    Down { x: f32, y: f32, region: Option<String> },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub line: usize,
    pub contact: i32,
    pub kind: StepKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    pub body: ScrollDecl,
    pub carousels: Vec<CarouselDecl>,
    pub steps: Vec<Step>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            body: ScrollDecl {
                offset: 0.0,
                max: 10_000.0,
            },
            carousels: Vec::new(),
            steps: Vec::new(),
        }
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut script = Script::default();
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = raw.split('#').next().unwrap_or_default();
            let mut words: Vec<&str> = text.split_whitespace().collect();
            let Some(&command) = words.first() else {
                continue;
            };

            let suffix = words.last().copied().filter(|_| words.len() > 1);
            let contact = match suffix.and_then(|w| w.strip_prefix('@')) {
                Some(id) => {
                    let id = id.parse().map_err(|_| ScriptError::Number {
                        line,
                        value: id.to_owned(),
                    })?;
                    words.pop();
                    id
                }
                None => DEFAULT_CONTACT,
            };
            let args = &words[1..];

            match command {
                "body" => {
                    script.ensure_no_steps(line, "body")?;
                    let [offset, max] = numbers(line, "body", "an offset and a maximum", args)?;
                    script.body = ScrollDecl { offset, max };
                }
                "carousel" => {
                    script.ensure_no_steps(line, "carousel")?;
                    let expected = "a name, an offset and a maximum";
                    let Some((&name, rest)) = args.split_first() else {
                        return Err(arity(line, "carousel", expected));
                    };
                    let [offset, max] = numbers(line, "carousel", expected, rest)?;
                    if script.carousel(name).is_some() {
                        return Err(ScriptError::DuplicateRegion {
                            line,
                            name: name.to_owned(),
                        });
                    }
                    script.carousels.push(CarouselDecl {
                        name: name.to_owned(),
                        scroll: ScrollDecl { offset, max },
                    });
                }
                "down" => {
                    let expected = "x, y and an optional carousel name";
                    let (coords, region) = match args.len() {
                        2 => (args, None),
                        3 => (&args[..2], Some(args[2])),
                        _ => return Err(arity(line, "down", expected)),
                    };
                    let [x, y] = numbers(line, "down", expected, coords)?;
                    if let Some(name) = region {
                        if script.carousel(name).is_none() {
                            return Err(ScriptError::UnknownRegion {
                                line,
                                name: name.to_owned(),
                            });
                        }
                    }
                    script.push(line, contact, StepKind::Down {
                        x,
                        y,
                        region: region.map(str::to_owned),
                    });
                }
                "move" => {
                    let [x, y] = numbers(line, "move", "x and y", args)?;
                    script.push(line, contact, StepKind::Move { x, y });
                }
                "up" | "cancel" => {
                    let (name, kind) = if command == "up" {
                        ("up", StepKind::Up)
                    } else {
                        ("cancel", StepKind::Cancel)
                    };
                    if !args.is_empty() {
                        return Err(arity(line, name, "no arguments"));
                    }
                    script.push(line, contact, kind);
                }
                other => {
                    return Err(ScriptError::UnknownCommand {
                        line,
                        command: other.to_owned(),
                    })
                }
            }
        }
        Ok(script)
    }
}

impl Script {
    pub fn carousel(&self, name: &str) -> Option<&CarouselDecl> {
        self.carousels.iter().find(|c| c.name == name)
    }

    fn push(&mut self, line: usize, contact: i32, kind: StepKind) {
        self.steps.push(Step {
            line,
            contact,
            kind,
        });
    }

    fn ensure_no_steps(&self, line: usize, command: &'static str) -> Result<(), ScriptError> {
        if self.steps.is_empty() {
            Ok(())
        } else {
            Err(ScriptError::LateDeclaration { line, command })
        }
    }
}

fn arity(line: usize, command: &'static str, expected: &'static str) -> ScriptError {
    ScriptError::Arity {
        line,
        command,
        expected,
    }
}

fn numbers<const N: usize>(
    line: usize,
    command: &'static str,
    expected: &'static str,
    args: &[&str],
) -> Result<[f32; N], ScriptError> {
    if args.len() != N {
        return Err(arity(line, command, expected));
    }
    let mut values = [0.0; N];
    for (slot, word) in values.iter_mut().zip(args) {
        *slot = word
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ScriptError::Number {
                line,
                value: (*word).to_owned(),
            })?;
    }
    Ok(values)
}
