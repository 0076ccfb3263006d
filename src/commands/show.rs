use crate::args::ShowArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::view::DisplayState;
use crate::{render, store, Config, Result};

/// Displays every transaction in the data file, in file order unless a sort is requested.
///
/// # Errors
/// - Returns an error if the data file exists but cannot be read or parsed.
pub async fn show(config: &Config, args: &ShowArgs) -> Result<Out<Vec<Transaction>>> {
    let set = store::load(config.data_file()).await?;
    let mut view = DisplayState::new(&set);
    if let Some((column, direction)) = args.sort().sort() {
        view.sort_with(column, direction);
    }
    let text = render::render(&view, config.format())?;
    Ok(Out::new(text, view.rows().to_vec()))
}
