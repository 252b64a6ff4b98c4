pub mod prompt_handler;

pub use prompt_handler::{
    __path_create_prompt, __path_delete_prompt, __path_get_prompt, __path_list_catalog,
    __path_list_prompts, __path_update_prompt, create_prompt, delete_prompt, get_prompt,
    list_catalog, list_prompts, update_prompt,
};
