//! The demo driver: build both sequences, display, sort, display again.
//!
//! Each sort routine here also displays its own view of the sequence
//! before and after sorting, so the transcript shows what the callee saw
//! next to what the caller sees afterwards.

use crate::algo::{sort_by_ref, sort_by_value, sort_run};
use crate::core::{DEMO_CHARS, IntArray, Label, RunStart};
use crate::display::display_elements;
use crate::error::DemoError;
use std::io::{self, Read, Write};
use tracing::info;

/// Text shown before waiting for the closing keystroke.
pub const CLOSE_PROMPT: &str = "Type any key to close this window...";

/// Runs the demo against any byte sink.
pub struct Demo<W: Write> {
    out: W,
}

impl<W: Write> Demo<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Runs the array demo, then the vector demo.
    pub fn run(&mut self) -> Result<(), DemoError> {
        self.array_demo()?;
        self.vector_demo()?;
        self.out.flush()?;
        Ok(())
    }

    /// Sorts the bounded integer sequence, passing the count it was declared with.
    pub fn array_demo(&mut self) -> Result<IntArray, DemoError> {
        let mut int_array = IntArray::demo();
        let num_elements = IntArray::num_elements();
        info!(num_elements, "array demo");

        display_elements(
            &mut self.out,
            int_array.as_slice(),
            Label::new("main", "array before sort"),
        )?;
        self.sort_int_array(int_array.run_start(), num_elements)?;
        display_elements(
            &mut self.out,
            int_array.as_slice(),
            Label::new("main", "array after sort"),
        )?;

        Ok(int_array)
    }

    /// Sorts a copy of the character vector, then the vector itself.
    pub fn vector_demo(&mut self) -> Result<Vec<char>, DemoError> {
        let mut char_vector = DEMO_CHARS.to_vec();
        info!(len = char_vector.len(), "vector demo");

        display_elements(
            &mut self.out,
            &char_vector,
            Label::new("main", "vector before sort"),
        )?;

        self.sort_char_vector(char_vector.clone())?;
        display_elements(
            &mut self.out,
            &char_vector,
            Label::new("main", "vector after sort by value"),
        )?;

        self.sort_char_vector_in_place(&mut char_vector)?;
        display_elements(
            &mut self.out,
            &char_vector,
            Label::new("main", "vector after sort by reference"),
        )?;

        Ok(char_vector)
    }

    fn sort_int_array(
        &mut self,
        mut ia: RunStart<'_, i32>,
        num_elements: usize,
    ) -> Result<(), DemoError> {
        const ROUTINE: &str = "sort_int_array";

        display_elements(
            &mut self.out,
            ia.elements(num_elements)?,
            Label::new(ROUTINE, "array before sort"),
        )?;

        // Re-borrow so the run can be displayed again once sorted.
        sort_run(RunStart::new(ia.elements_mut(num_elements)?), num_elements)?;

        display_elements(
            &mut self.out,
            ia.elements(num_elements)?,
            Label::new(ROUTINE, "array after sort"),
        )?;
        Ok(())
    }

    // Works on its own copy, so the caller's vector stays as it was.
    fn sort_char_vector(&mut self, vc: Vec<char>) -> Result<(), DemoError> {
        const ROUTINE: &str = "sort_char_vector";

        display_elements(&mut self.out, &vc, Label::new(ROUTINE, "vector before sort"))?;
        sort_by_value(vc, |sorted| {
            display_elements(&mut self.out, sorted, Label::new(ROUTINE, "vector after sort"))
        })?;
        Ok(())
    }

    fn sort_char_vector_in_place(&mut self, vc: &mut [char]) -> Result<(), DemoError> {
        const ROUTINE: &str = "sort_char_vector_in_place";

        display_elements(&mut self.out, vc, Label::new(ROUTINE, "vector before sort"))?;
        sort_by_ref(vc);
        display_elements(&mut self.out, vc, Label::new(ROUTINE, "vector after sort"))?;
        Ok(())
    }

    /// Shows the close prompt and blocks until one byte (or EOF) arrives on `input`.
    pub fn wait_for_keystroke<R: Read>(&mut self, input: &mut R) -> io::Result<()> {
        self.out.write_all(CLOSE_PROMPT.as_bytes())?;
        self.out.flush()?;
        let mut key = [0u8; 1];
        let read = input.read(&mut key)?;
        info!(bytes = read, "keystroke received");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
