mod update_labels;

pub use update_labels::UpdateUserLabelsUseCase;
