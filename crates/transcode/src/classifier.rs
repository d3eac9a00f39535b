//! Typed value classifier
//!
//! Walks the parse events of one tag value and decides its primitive kind.
//! The walk is a finite-state machine with a single current state:
//!
//! | Event | `Scalar` | `InArray` | `InObject` |
//! |-------|----------|-----------|------------|
//! | string | string value | buffer it | ignored |
//! | number / boolean / null | scalar value | error | ignored |
//! | array start | enter `InArray` | error | ignored |
//! | array end | error | string set value, back to `Scalar` | ignored |
//! | object start | enter `InObject` | error | error |
//! | object end | error | error | opaque value, back to `Scalar` |
//!
//! Arrays hold strings only and objects are skipped one level deep. A
//! nested object inside an opaque payload, or anything but a string inside
//! an array, is rejected instead of being given invented semantics.

use crate::events::{self, JsonEvent};
use tagdex_core::{ClassifiedValue, ValueParseFailure};

/// Classifier state
#[derive(Debug, Clone, PartialEq)]
enum State {
    /// Outside any container
    Scalar,
    /// Inside a string set, holding the strings seen so far
    InArray(Vec<String>),
    /// Inside an opaque object payload
    InObject,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Scalar => "scalar",
            State::InArray(_) => "array",
            State::InObject => "object",
        }
    }
}

/// Event-driven classifier for a single top-level JSON value
#[derive(Debug)]
pub struct Classifier {
    state: State,
    value: Option<ClassifiedValue>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier in the `Scalar` state
    pub fn new() -> Self {
        Classifier {
            state: State::Scalar,
            value: None,
        }
    }

    /// Feed one parse event
    pub fn feed(&mut self, event: JsonEvent<'_>) -> Result<(), ValueParseFailure> {
        if self.value.is_some() {
            return Err(self.unexpected(&event));
        }

        let state = std::mem::replace(&mut self.state, State::Scalar);
        self.state = match (state, event) {
            (State::Scalar, JsonEvent::String(s)) => {
                self.value = Some(ClassifiedValue::String(s.to_string()));
                State::Scalar
            }
            (State::Scalar, JsonEvent::Number(n)) => {
                self.value = Some(ClassifiedValue::Number(n));
                State::Scalar
            }
            (State::Scalar, JsonEvent::Bool(b)) => {
                self.value = Some(ClassifiedValue::Boolean(b));
                State::Scalar
            }
            (State::Scalar, JsonEvent::Null) => {
                self.value = Some(ClassifiedValue::Null);
                State::Scalar
            }
            (State::Scalar, JsonEvent::ArrayStart) => State::InArray(Vec::new()),
            (State::Scalar, JsonEvent::ObjectStart) => State::InObject,

            (State::InArray(mut set), JsonEvent::String(s)) => {
                set.push(s.to_string());
                State::InArray(set)
            }
            (State::InArray(set), JsonEvent::ArrayEnd) => {
                self.value = Some(ClassifiedValue::SetOfStrings(set));
                State::Scalar
            }

            (State::InObject, JsonEvent::ObjectEnd) => {
                self.value = Some(ClassifiedValue::Opaque);
                State::Scalar
            }
            (State::InObject, JsonEvent::ObjectStart) => {
                return Err(ValueParseFailure::UnexpectedEvent {
                    event: JsonEvent::ObjectStart.name(),
                    state: State::InObject.name(),
                });
            }
            (State::InObject, _) => State::InObject,

            (state, event) => {
                return Err(ValueParseFailure::UnexpectedEvent {
                    event: event.name(),
                    state: state.name(),
                });
            }
        };
        Ok(())
    }

    /// Finish the stream and return the classified value
    pub fn finish(self) -> Result<ClassifiedValue, ValueParseFailure> {
        match (self.state, self.value) {
            (State::Scalar, Some(value)) => Ok(value),
            _ => Err(ValueParseFailure::Incomplete),
        }
    }

    fn unexpected(&self, event: &JsonEvent<'_>) -> ValueParseFailure {
        ValueParseFailure::UnexpectedEvent {
            event: event.name(),
            state: self.state.name(),
        }
    }
}

/// Classify one decoded JSON text
///
/// # Example
///
/// ```
/// use tagdex_core::ClassifiedValue;
/// use tagdex_transcode::classifier::classify;
///
/// assert_eq!(classify("4").unwrap(), ClassifiedValue::Number(4.0));
/// assert_eq!(classify(r#"{"size": 4}"#).unwrap(), ClassifiedValue::Opaque);
/// ```
pub fn classify(json: &str) -> Result<ClassifiedValue, ValueParseFailure> {
    let value = events::parse(json)?;
    classify_events(events::events(&value)?)
}

/// Classify an already-flattened event stream
pub fn classify_events<'a, I>(stream: I) -> Result<ClassifiedValue, ValueParseFailure>
where
    I: IntoIterator<Item = JsonEvent<'a>>,
{
    let mut classifier = Classifier::new();
    for event in stream {
        classifier.feed(event)?;
    }
    classifier.finish()
}
