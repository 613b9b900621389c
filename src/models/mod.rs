mod note;

pub use note::{
    validate_note_fields, CreateNoteRequest, EditNoteRequest, ListNotesQuery, Note, NoteFilter,
    SortOrder,
};
