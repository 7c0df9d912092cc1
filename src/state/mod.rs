mod builtin;
mod catalog;
mod persistence;

pub use builtin::{builtin_foods, builtin_substitutions};
pub use catalog::{FoodCatalog, ReferenceData, ReferenceFile, SubstitutionGraph};
pub use persistence::{
    load_config, load_plan, load_profile, load_reference_data, save_plan, save_profile,
    save_reference_data, write_shopping_csv,
};
