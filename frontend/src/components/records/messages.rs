use common::editor::upload::SelectedFile;
use common::model::record::RecordId;

pub enum Msg {
    UpdateField(&'static str, String),
    /// Text typed into the "add item" input of a list field.
    UpdatePendingItem(&'static str, String),
    AddItem(&'static str),
    RemoveItem(&'static str, usize),
    Submit,
    Remove(RecordId),
    OpenFileDialog,
    FileSelected(web_sys::File),
    FileRead(SelectedFile),
    FileReadFailed(String),
    OpenViewer(RecordId),
    CloseViewer,
}
