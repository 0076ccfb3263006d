use crate::args::SearchArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::view::DisplayState;
use crate::{render, store, Config, Result};
use tracing::info;

/// Displays the transactions that match the search term, in file order unless a sort is
/// requested.
///
/// # Errors
/// - Returns an error if the data file exists but cannot be read or parsed.
pub async fn search(config: &Config, args: &SearchArgs) -> Result<Out<Vec<Transaction>>> {
    let set = store::load(config.data_file()).await?;
    let mut view = DisplayState::new(&set);
    view.search(&set, args.term(), args.mode());
    if let Some((column, direction)) = args.sort().sort() {
        view.sort_with(column, direction);
    }
    info!(
        "{} of {} transactions match '{}'",
        view.rows().len(),
        set.len(),
        args.term()
    );
    let text = render::render(&view, config.format())?;
    Ok(Out::new(text, view.rows().to_vec()))
}
