use crate::prelude::*;

/// An integer coordinate pair. This subset of SVG is integer-only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// One path command: the command letter and the points that followed it.
/// Commands with no points are never emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCommand {
    pub letter: char,
    pub points: Vec<Point>,
}

/// Tokenizer state for one path data string.
struct PathScanner {
    commands: Vec<PathCommand>,
    current: Option<PathCommand>,
    token: String,
    // first scalar of a half-built coordinate pair
    pending: Option<i32>,
}

impl PathScanner {
    fn new() -> PathScanner {
        PathScanner {
            commands: Vec::new(),
            current: None,
            token: String::new(),
            pending: None,
        }
    }

    // Convert the accumulated token to a scalar. Two scalars make a point.
    fn finish_token(&mut self) -> Result<(), Error> {
        if self.token.is_empty() {
            return Ok(());
        }
        let value: i32 = self
            .token
            .parse()
            .map_err(|_| Error::InvalidCoordinate(self.token.clone()))?;
        self.token.clear();
        match self.pending.take() {
            None => self.pending = Some(value),
            Some(x) => self.push_point(Point::new(x, value)),
        }
        Ok(())
    }

    fn push_point(&mut self, point: Point) {
        // points before any command letter have nowhere to go
        if let Some(ref mut cmd) = self.current {
            cmd.points.push(point);
        }
    }

    // End the current command. A dangling single scalar becomes a square
    // point (x = y = value): that is how H/h/V/v carry their one value in
    // this subset. True horizontal/vertical semantics would take the other
    // axis from the previous point instead; this parser keeps the
    // square-point approximation on purpose.
    fn finish_command(&mut self) {
        if let Some(value) = self.pending.take() {
            self.push_point(Point::new(value, value));
        }
        if let Some(cmd) = self.current.take() {
            if !cmd.points.is_empty() {
                self.commands.push(cmd);
            }
        }
    }
}

/// Tokenize TinySVG 1.2-style path data into commands.
///
/// Any letter starts a new command. Digits and a leading `-` accumulate into
/// the current coordinate token; whitespace and commas terminate it. Fails
/// only when a coordinate token is not a valid integer.
pub fn parse_path(d: &str) -> Result<Vec<PathCommand>, Error> {
    let mut scan = PathScanner::new();
    for c in d.chars() {
        if c.is_ascii_alphabetic() {
            scan.finish_token()?;
            scan.finish_command();
            scan.current = Some(PathCommand {
                letter: c,
                points: Vec::new(),
            });
        } else if c.is_whitespace() || c == ',' {
            scan.finish_token()?;
        } else if c == '-' {
            // a sign inside a token ends it and starts the next one
            scan.finish_token()?;
            scan.token.push(c);
        } else {
            scan.token.push(c);
        }
    }
    scan.finish_token()?;
    scan.finish_command();
    Ok(scan.commands)
}

#[derive(Debug)]
pub struct TagPath {
    pub commands: Vec<PathCommand>,
    pub fill: Color,
}

impl TagPath {
    pub fn parse(node: &Node, fill: Color) -> Result<TagPath, Error> {
        let commands = parse_path(node.attribute("d").unwrap_or(""))?;
        Ok(TagPath { commands, fill })
    }

    /// Draw every segment with the Bresenham primitive. A current point is
    /// tracked across commands: `M`/`m` starts a new subpath, `L/H/V` points
    /// connect from the previous point, and `Z`/`z` closes the subpath back
    /// to its first point once it holds at least two points. Lowercase
    /// letters are treated as absolute, like their uppercase forms.
    pub fn draw(&self, surface: &mut Surface) {
        let mut start: Option<Point> = None;
        let mut last: Option<Point> = None;
        let mut len = 0usize;
        for cmd in &self.commands {
            match cmd.letter {
                'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' => {
                    if cmd.letter == 'M' || cmd.letter == 'm' {
                        start = None;
                        last = None;
                        len = 0;
                    }
                    for &p in &cmd.points {
                        if let Some(prev) = last {
                            surface.line(prev, p, self.fill);
                        }
                        if start.is_none() {
                            start = Some(p);
                        }
                        last = Some(p);
                        len += 1;
                    }
                }
                'Z' | 'z' => {
                    if len >= 2 {
                        if let (Some(prev), Some(first)) = (last, start) {
                            surface.line(prev, first, self.fill);
                            last = Some(first);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
