//! Built-in design-system registry tables.
//!
//! Registration order is significant: fuzzy matching scans entries in the
//! order they appear here, so more specific names must not be shadowed by
//! earlier, more general ones (e.g. `Table` is registered before `Tab`).

use super::{CatalogComponent, Category, Framework, PropExample, PropSpec};

fn prop(
    name: &str,
    prop_type: &str,
    required: bool,
    default_value: Option<&str>,
    description: &str,
) -> PropSpec {
    PropSpec {
        name: name.to_string(),
        prop_type: prop_type.to_string(),
        required,
        default_value: default_value.map(str::to_string),
        description: description.to_string(),
    }
}

fn example(name: &str, code: &str, description: &str) -> PropExample {
    PropExample {
        name: name.to_string(),
        code: code.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn components(framework: Framework) -> Vec<CatalogComponent> {
    let import = |module: &str| match framework {
        Framework::React => {
            format!("@dealicious/design-system-react/src/components/{module}")
        }
        Framework::Vue => format!("@dealicious/design-system/src/components/{module}"),
    };
    // v-model naming differs between the frameworks.
    let value_prop = match framework {
        Framework::React => prop("value", "string", false, None, "Input value"),
        Framework::Vue => prop("modelValue", "string", false, None, "Input value (v-model)"),
    };
    let checked_prop = match framework {
        Framework::React => prop(
            "checked",
            "boolean",
            false,
            Some("false"),
            "Whether the switch is on",
        ),
        Framework::Vue => prop(
            "modelValue",
            "boolean",
            false,
            Some("false"),
            "Whether the switch is on (v-model)",
        ),
    };

    vec![
        CatalogComponent {
            name: "Button".to_string(),
            description: "Primary button component with multiple variants".to_string(),
            category: Category::Actions,
            import_path: import("ssm-button"),
            props: vec![
                prop(
                    "variant",
                    "'primary' | 'secondary' | 'tertiary' | 'danger'",
                    false,
                    Some("'primary'"),
                    "Button variant style",
                ),
                prop(
                    "size",
                    "'small' | 'medium' | 'large'",
                    false,
                    Some("'medium'"),
                    "Button size",
                ),
                prop(
                    "disabled",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the button is disabled",
                ),
                prop(
                    "loading",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the button is in loading state",
                ),
            ],
            examples: vec![
                example("Basic Button", "<Button>Click me</Button>", "Basic button usage"),
                example(
                    "Primary Button",
                    "<Button variant=\"primary\">Primary</Button>",
                    "Primary variant button",
                ),
            ],
        },
        CatalogComponent {
            name: "Input".to_string(),
            description: "Text input component with validation support".to_string(),
            category: Category::Forms,
            import_path: import("ssm-input"),
            props: vec![
                prop(
                    "type",
                    "'text' | 'email' | 'password' | 'number'",
                    false,
                    Some("'text'"),
                    "Input type",
                ),
                prop("placeholder", "string", false, None, "Placeholder text"),
                value_prop,
                prop(
                    "disabled",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the input is disabled",
                ),
                prop("error", "string", false, None, "Error message to display"),
            ],
            examples: vec![
                example(
                    "Basic Input",
                    "<Input placeholder=\"Enter text\" />",
                    "Basic input field",
                ),
                example(
                    "Input with Error",
                    "<Input error=\"This field is required\" />",
                    "Input with error state",
                ),
            ],
        },
        CatalogComponent {
            name: "Card".to_string(),
            description: "Card container component for content grouping".to_string(),
            category: Category::Layout,
            import_path: import("ssm-card"),
            props: vec![
                prop("title", "string", false, None, "Card title"),
                prop("subtitle", "string", false, None, "Card subtitle"),
                prop(
                    "elevation",
                    "number",
                    false,
                    Some("1"),
                    "Card elevation level (0-3)",
                ),
                prop(
                    "padding",
                    "'none' | 'small' | 'medium' | 'large'",
                    false,
                    Some("'medium'"),
                    "Card padding size",
                ),
            ],
            examples: vec![example(
                "Basic Card",
                "<Card title=\"Card Title\">Card content</Card>",
                "Basic card with title",
            )],
        },
        CatalogComponent {
            name: "Modal".to_string(),
            description: "Modal dialog component for overlays".to_string(),
            category: Category::Overlays,
            import_path: import("ssm-modal"),
            props: vec![
                prop("isOpen", "boolean", true, None, "Whether the modal is open"),
                prop("title", "string", false, None, "Modal title"),
                prop(
                    "size",
                    "'small' | 'medium' | 'large' | 'fullscreen'",
                    false,
                    Some("'medium'"),
                    "Modal size",
                ),
            ],
            examples: vec![example(
                "Basic Modal",
                "<Modal isOpen title=\"Modal Title\">Modal content</Modal>",
                "Basic modal usage",
            )],
        },
        CatalogComponent {
            name: "Table".to_string(),
            description: "Data table component with sorting and pagination".to_string(),
            category: Category::DataDisplay,
            import_path: import("ssm-table"),
            props: vec![
                prop("data", "Array<any>", true, None, "Table data array"),
                prop("columns", "Array<Column>", true, None, "Table column definitions"),
                prop(
                    "sortable",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether columns are sortable",
                ),
            ],
            examples: vec![example(
                "Basic Table",
                "<Table data={data} columns={columns} />",
                "Basic table with data",
            )],
        },
        CatalogComponent {
            name: "Text".to_string(),
            description: "Typography component for body and heading text".to_string(),
            category: Category::DataDisplay,
            import_path: import("ssm-text"),
            props: vec![
                prop(
                    "variant",
                    "'body' | 'caption' | 'heading' | 'title'",
                    false,
                    Some("'body'"),
                    "Typography variant",
                ),
                prop("color", "string", false, None, "Text color token"),
            ],
            examples: vec![example(
                "Basic Text",
                "<Text>Hello</Text>",
                "Body text",
            )],
        },
        CatalogComponent {
            name: "TextLink".to_string(),
            description: "Inline hyperlink with design-system styling".to_string(),
            category: Category::Navigation,
            import_path: import("ssm-text-link"),
            props: vec![
                prop("href", "string", true, None, "Link destination"),
                prop(
                    "underline",
                    "boolean",
                    false,
                    Some("true"),
                    "Whether the link is underlined",
                ),
            ],
            examples: vec![example(
                "Basic TextLink",
                "<TextLink href=\"/orders\">View orders</TextLink>",
                "Inline link",
            )],
        },
        CatalogComponent {
            name: "Chip".to_string(),
            description: "Compact selectable chip for filters and choices".to_string(),
            category: Category::DataDisplay,
            import_path: import("ssm-chip"),
            props: vec![
                prop(
                    "size",
                    "'small' | 'medium' | 'large'",
                    false,
                    Some("'medium'"),
                    "Chip size",
                ),
                prop(
                    "selected",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the chip is selected",
                ),
            ],
            examples: vec![example("Basic Chip", "<Chip>Filter</Chip>", "Filter chip")],
        },
        CatalogComponent {
            name: "Badge".to_string(),
            description: "Small status badge, often numeric".to_string(),
            category: Category::DataDisplay,
            import_path: import("ssm-badge"),
            props: vec![
                prop(
                    "size",
                    "'small' | 'medium' | 'large'",
                    false,
                    Some("'medium'"),
                    "Badge size",
                ),
                prop(
                    "tone",
                    "'neutral' | 'info' | 'success' | 'danger'",
                    false,
                    Some("'neutral'"),
                    "Badge color tone",
                ),
            ],
            examples: vec![example("Basic Badge", "<Badge>3</Badge>", "Count badge")],
        },
        CatalogComponent {
            name: "Tag".to_string(),
            description: "Label tag for categorization".to_string(),
            category: Category::DataDisplay,
            import_path: import("ssm-tag"),
            props: vec![
                prop(
                    "size",
                    "'small' | 'medium' | 'large'",
                    false,
                    Some("'medium'"),
                    "Tag size",
                ),
                prop(
                    "closable",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the tag shows a close affordance",
                ),
            ],
            examples: vec![example("Basic Tag", "<Tag>New</Tag>", "Category tag")],
        },
        CatalogComponent {
            name: "Icon".to_string(),
            description: "Design-system icon glyph".to_string(),
            category: Category::Media,
            import_path: import("ssm-icon"),
            props: vec![
                prop("name", "string", true, None, "Icon glyph name"),
                prop("size", "number", false, Some("16"), "Icon size in pixels"),
            ],
            examples: vec![example(
                "Basic Icon",
                "<Icon name=\"search\" />",
                "Search icon",
            )],
        },
        CatalogComponent {
            name: "Switch".to_string(),
            description: "On/off toggle switch".to_string(),
            category: Category::Forms,
            import_path: import("ssm-switch"),
            props: vec![
                checked_prop,
                prop(
                    "disabled",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the switch is disabled",
                ),
            ],
            examples: vec![example("Basic Switch", "<Switch />", "Toggle switch")],
        },
        CatalogComponent {
            name: "Tab".to_string(),
            description: "Tab navigation component".to_string(),
            category: Category::Navigation,
            import_path: import("ssm-tab"),
            props: vec![
                prop("items", "Array<string>", false, None, "Tab labels"),
                prop("activeIndex", "number", false, Some("0"), "Selected tab index"),
            ],
            examples: vec![example(
                "Basic Tab",
                "<Tab items={['All', 'Open']} />",
                "Two tabs",
            )],
        },
        CatalogComponent {
            name: "Accordion".to_string(),
            description: "Expandable/collapsible content section".to_string(),
            category: Category::Layout,
            import_path: import("ssm-accordion"),
            props: vec![
                prop("title", "string", false, None, "Accordion header title"),
                prop(
                    "expanded",
                    "boolean",
                    false,
                    Some("false"),
                    "Whether the section starts expanded",
                ),
            ],
            examples: vec![example(
                "Basic Accordion",
                "<Accordion title=\"Details\">Body</Accordion>",
                "Collapsed section",
            )],
        },
        CatalogComponent {
            name: "LabeledText".to_string(),
            description: "Label/value pair for read-only data display".to_string(),
            category: Category::DataDisplay,
            import_path: import("ssm-labeled-text"),
            props: vec![
                prop("label", "string", true, None, "Field label"),
                prop("value", "string", false, None, "Field value"),
            ],
            examples: vec![example(
                "Basic LabeledText",
                "<LabeledText label=\"Name\" value=\"John Doe\" />",
                "Label/value pair",
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_registered_before_tab() {
        let components = components(Framework::React);
        let table = components.iter().position(|c| c.name == "Table").unwrap();
        let tab = components.iter().position(|c| c.name == "Tab").unwrap();
        assert!(table < tab, "fuzzy matching relies on Table preceding Tab");
    }

    #[test]
    fn text_is_registered_before_textlink() {
        let components = components(Framework::Vue);
        let text = components.iter().position(|c| c.name == "Text").unwrap();
        let link = components.iter().position(|c| c.name == "TextLink").unwrap();
        assert!(text < link);
    }

    #[test]
    fn vue_input_uses_model_value() {
        let components = components(Framework::Vue);
        let input = components.iter().find(|c| c.name == "Input").unwrap();
        assert!(input.props.iter().any(|p| p.name == "modelValue"));
    }

    #[test]
    fn react_input_uses_value() {
        let components = components(Framework::React);
        let input = components.iter().find(|c| c.name == "Input").unwrap();
        assert!(input.props.iter().any(|p| p.name == "value"));
    }
}
