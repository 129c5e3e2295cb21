//! Pointer scripts for `flick replay`.
//!
//! A script is a `;`-separated list of steps:
//!
//! ```text
//! down 20,20; up
//! touchstart 80,22; touchend 80,22
//! down 20,20; leave
//! ```

use flick_core::{Point, PointerEvent, WidgetId};
use std::fmt;
use thiserror::Error;

/// Errors from parsing a pointer script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ScriptError {
    /// Unknown step name
    #[error("step {index}: unknown action '{action}'")]
    UnknownAction {
        /// 1-based step number
        index: usize,
        /// The offending word
        action: String,
    },
    /// Coordinates did not parse as `X,Y`
    #[error("step {index}: invalid coordinates '{text}', expected X,Y")]
    BadPoint {
        /// 1-based step number
        index: usize,
        /// The offending text
        text: String,
    },
    /// A press without coordinates
    #[error("step {index}: '{action}' needs coordinates")]
    MissingPoint {
        /// 1-based step number
        index: usize,
        /// The step name
        action: String,
    },
    /// Release with no earlier point to fall back on
    #[error("step {index}: '{action}' has no coordinates and nothing was pressed before it")]
    NoPreviousPoint {
        /// 1-based step number
        index: usize,
        /// The step name
        action: String,
    },
    /// `leave` with trailing arguments
    #[error("step {index}: 'leave' takes no arguments")]
    LeaveWithArgs {
        /// 1-based step number
        index: usize,
    },
    /// No steps at all
    #[error("script is empty")]
    Empty,
}

/// One script step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    /// Mouse press
    Down(Point),
    /// Mouse release
    Up(Point),
    /// Touch start
    TouchStart(Point),
    /// Touch end
    TouchEnd(Point),
    /// Pointer left the switch
    Leave,
}

impl Step {
    /// The pointer event this step dispatches.
    pub(crate) fn event(self, target: WidgetId) -> PointerEvent {
        match self {
            Self::Down(p) => PointerEvent::mouse_down(p),
            Self::Up(p) => PointerEvent::mouse_up(p),
            Self::TouchStart(p) => PointerEvent::touch_start(p),
            Self::TouchEnd(p) => PointerEvent::touch_end(p),
            Self::Leave => PointerEvent::leave(target),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down(p) => write!(f, "down {},{}", p.x, p.y),
            Self::Up(p) => write!(f, "up {},{}", p.x, p.y),
            Self::TouchStart(p) => write!(f, "touchstart {},{}", p.x, p.y),
            Self::TouchEnd(p) => write!(f, "touchend {},{}", p.x, p.y),
            Self::Leave => f.write_str("leave"),
        }
    }
}

/// Parse a script into steps.
///
/// Releases without coordinates reuse the most recent press or release
/// point.
pub(crate) fn parse(script: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    let mut last: Option<Point> = None;

    for (i, raw) in script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        let index = i + 1;
        let (action, rest) = match raw.split_once(char::is_whitespace) {
            Some((a, r)) => (a, r.trim()),
            None => (raw, ""),
        };
        let action = action.to_ascii_lowercase();
        if !matches!(
            action.as_str(),
            "down" | "up" | "touchstart" | "touchend" | "leave"
        ) {
            return Err(ScriptError::UnknownAction { index, action });
        }
        if action == "leave" {
            if !rest.is_empty() {
                return Err(ScriptError::LeaveWithArgs { index });
            }
            steps.push(Step::Leave);
            continue;
        }

        let point = if rest.is_empty() {
            None
        } else {
            Some(parse_point(rest).ok_or_else(|| ScriptError::BadPoint {
                index,
                text: rest.to_string(),
            })?)
        };

        let at = if matches!(action.as_str(), "down" | "touchstart") {
            point.ok_or_else(|| ScriptError::MissingPoint {
                index,
                action: action.clone(),
            })?
        } else {
            point.or(last).ok_or_else(|| ScriptError::NoPreviousPoint {
                index,
                action: action.clone(),
            })?
        };
        last = Some(at);

        let step = match action.as_str() {
            "down" => Step::Down(at),
            "touchstart" => Step::TouchStart(at),
            "up" => Step::Up(at),
            _ => Step::TouchEnd(at),
        };
        steps.push(step);
    }

    if steps.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(steps)
}

fn parse_point(text: &str) -> Option<Point> {
    let (x, y) = text.split_once(',')?;
    let x: f32 = x.trim().parse().ok()?;
    let y: f32 = y.trim().parse().ok()?;
    (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Parsing Tests =====

    #[test]
    fn test_parse_click() {
        let steps = parse("down 20,20; up").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Down(Point::new(20.0, 20.0)),
                Step::Up(Point::new(20.0, 20.0))
            ]
        );
    }

    #[test]
    fn test_parse_touch_and_leave() {
        let steps = parse(" touchstart 80, 22 ;touchend 90,22; down 1.5,2; leave ").unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::TouchStart(Point::new(80.0, 22.0)));
        assert_eq!(steps[1], Step::TouchEnd(Point::new(90.0, 22.0)));
        assert_eq!(steps[2], Step::Down(Point::new(1.5, 2.0)));
        assert_eq!(steps[3], Step::Leave);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse("DOWN 1,1").unwrap(), vec![Step::Down(Point::new(1.0, 1.0))]);
    }

    #[test]
    fn test_up_uses_previous_point() {
        let steps = parse("down 3,4; up 5,6; touchend").unwrap();
        assert_eq!(steps[2], Step::TouchEnd(Point::new(5.0, 6.0)));
    }

    #[test]
    fn test_display() {
        let steps = parse("down 20,20; up; leave").unwrap();
        let text: Vec<String> = steps.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["down 20,20", "up 20,20", "leave"]);
    }

    #[test]
    fn test_step_event() {
        let id = WidgetId::new(7);
        assert_eq!(Step::Leave.event(id), PointerEvent::leave(id));
        assert_eq!(
            Step::TouchStart(Point::ORIGIN).event(id),
            PointerEvent::touch_start(Point::ORIGIN)
        );
    }

    // ===== Error Tests =====

    #[test]
    fn test_empty_script() {
        assert_eq!(parse(" ; ;"), Err(ScriptError::Empty));
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(
            parse("down 1,1; wiggle"),
            Err(ScriptError::UnknownAction {
                index: 2,
                action: "wiggle".to_string()
            })
        );
    }

    #[test]
    fn test_bad_point() {
        let err = parse("down 1;").unwrap_err();
        assert_eq!(err.to_string(), "step 1: invalid coordinates '1', expected X,Y");
        assert!(matches!(parse("down a,b"), Err(ScriptError::BadPoint { .. })));
        assert!(matches!(parse("down inf,1"), Err(ScriptError::BadPoint { .. })));
    }

    #[test]
    fn test_down_requires_point() {
        assert!(matches!(parse("down"), Err(ScriptError::MissingPoint { index: 1, .. })));
    }

    #[test]
    fn test_up_without_history() {
        assert!(matches!(parse("up"), Err(ScriptError::NoPreviousPoint { .. })));
        assert!(matches!(parse("leave; touchend"), Err(ScriptError::NoPreviousPoint { index: 2, .. })));
    }

    #[test]
    fn test_leave_with_args() {
        assert_eq!(parse("leave 1,1"), Err(ScriptError::LeaveWithArgs { index: 1 }));
        assert_eq!(
            parse("down 1,1; leave foo"),
            Err(ScriptError::LeaveWithArgs { index: 2 })
        );
    }

    #[test]
    fn test_unknown_action_checked_before_coordinates() {
        assert_eq!(
            parse("jump x"),
            Err(ScriptError::UnknownAction {
                index: 1,
                action: "jump".to_string()
            })
        );
    }
}
