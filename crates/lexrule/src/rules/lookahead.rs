use crate::character_scanner::CharacterScanner;

/// Counts the net reads made through it so a failed match can be undone.
pub(crate) struct Lookahead<'a> {
    scanner: &'a mut dyn CharacterScanner,
    consumed: usize,
}

impl<'a> Lookahead<'a> {
    pub(crate) fn new(scanner: &'a mut dyn CharacterScanner) -> Self {
        Self {
            scanner,
            consumed: 0,
        }
    }

    /// Net number of positions advanced since creation
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    /// Undo every read made through this lookahead
    pub(crate) fn rewind(self) {
        for _ in 0..self.consumed {
            self.scanner.unread();
        }
    }
}

impl CharacterScanner for Lookahead<'_> {
    fn read(&mut self) -> Option<char> {
        self.consumed += 1;
        self.scanner.read()
    }

    fn unread(&mut self) {
        // Never step back past the position the lookahead started from
        if self.consumed > 0 {
            self.consumed -= 1;
            self.scanner.unread();
        }
    }

    fn column(&mut self) -> Option<usize> {
        self.scanner.column()
    }

    fn legal_line_delimiters(&self) -> &[String] {
        self.scanner.legal_line_delimiters()
    }
}
