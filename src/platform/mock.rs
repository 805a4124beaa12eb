// src/platform/mock.rs

use crate::error::TerminalError;
use crate::platform::console::TtyControl;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Line-discipline stand-in: attributes are a plain string, every
/// `set_attrs` call is recorded.
#[derive(Default)]
pub struct MockTtyLog {
    pub sets: Vec<String>,
}

pub struct MockTty {
    log: Rc<RefCell<MockTtyLog>>,
    pub fail_get: bool,
    pub fail_set_raw: bool,
    pub fail_restore: bool,
}

impl MockTty {
    pub fn new(log: &Rc<RefCell<MockTtyLog>>) -> Self {
        MockTty {
            log: Rc::clone(log),
            fail_get: false,
            fail_set_raw: false,
            fail_restore: false,
        }
    }

    pub fn restore_count(log: &Rc<RefCell<MockTtyLog>>) -> usize {
        log.borrow().sets.iter().filter(|s| *s == "cooked").count()
    }
}

impl TtyControl for MockTty {
    type Attrs = String;

    fn get_attrs(&mut self) -> Result<String, TerminalError> {
        if self.fail_get {
            return Err(TerminalError::query(
                "tcgetattr",
                io::Error::new(io::ErrorKind::Other, "not a tty"),
            ));
        }
        Ok("cooked".to_string())
    }

    fn set_attrs(&mut self, attrs: &String) -> Result<(), TerminalError> {
        self.log.borrow_mut().sets.push(attrs.clone());
        let fail = if attrs == "cooked" {
            self.fail_restore
        } else {
            self.fail_set_raw
        };
        if fail {
            return Err(TerminalError::query(
                "tcsetattr",
                io::Error::new(io::ErrorKind::Other, "refused"),
            ));
        }
        Ok(())
    }

    fn raw_attrs(&self, original: &String, timeout_deciseconds: u8) -> String {
        format!("raw({}, vtime={})", original, timeout_deciseconds)
    }
}
