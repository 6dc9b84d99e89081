//! Access-control synthesizer.

use forge_spec::ModuleSpec;

use crate::naming;

/// Fixed header row of the ACL artifact.
pub const ACCESS_HEADER: &str =
    "id,name,model_id:id,group_id:id,perm_read,perm_write,perm_create,perm_unlink";

/// Render `security/ir.model.access.csv`: one full-permission row per
/// usable model, granted to the unrestricted group (empty group column).
pub fn render_access_csv(spec: &ModuleSpec) -> String {
    let mut out = String::from(ACCESS_HEADER);
    out.push('\n');
    for model in spec.usable_models() {
        let access = naming::access_id(&model.name);
        out.push_str(&format!(
            "{access},{access},{model},,1,1,1,1\n",
            model = naming::model_ref(&model.name),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_spec::ModelSpec;

    #[test]
    fn test_one_row_per_usable_model() {
        let spec = ModuleSpec::new("library_mgmt")
            .with_model(ModelSpec::new("library.book"))
            .with_model(ModelSpec::new(""))
            .with_model(ModelSpec::new("library.member"));

        let csv = render_access_csv(&spec);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], ACCESS_HEADER);
        assert_eq!(
            lines[1],
            "access_library_book,access_library_book,model_library_book,,1,1,1,1"
        );
        assert_eq!(
            lines[2],
            "access_library_member,access_library_member,model_library_member,,1,1,1,1"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_header_only_for_empty_module() {
        let csv = render_access_csv(&ModuleSpec::new("bare"));
        assert_eq!(csv, format!("{ACCESS_HEADER}\n"));
    }
}
