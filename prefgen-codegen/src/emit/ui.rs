//! UI descriptor: nested preference screens and controls.

use prefgen_schema::{GeneratorTables, NodeKind, ResourceStyle, SettingsTree};

use super::{Rendered, entries_array, title_resource, values_array};
use crate::{
    GenerateError,
    builder::{Indent, XmlBuilder},
    walk::{Visit, Visitor, walk},
};

/// Upper bound written for integer settings declared unbounded.
pub const UNBOUNDED_MAX: i64 = i32::MAX as i64;

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
const APP_NS: &str = "http://schemas.android.com/apk/res-auto";

/// Render the UI descriptor document.
pub fn render_ui(
    tree: &SettingsTree,
    tables: &GeneratorTables,
    style: &ResourceStyle,
) -> Result<Rendered, GenerateError> {
    let mut xml = XmlBuilder::new(Indent::from_width(style.indent));
    xml.declaration().open(
        &style.screen,
        &[("xmlns:android", ANDROID_NS), ("xmlns:app", APP_NS)],
    );

    let mut visitor = UiVisitor { xml, style };
    let report = walk(tree, tables, &mut visitor)?;

    let UiVisitor { mut xml, .. } = visitor;
    xml.close(&style.screen);
    Ok(Rendered {
        text: xml.build(),
        report,
    })
}

struct UiVisitor<'s> {
    xml: XmlBuilder,
    style: &'s ResourceStyle,
}

impl UiVisitor<'_> {
    fn title(&self, visit: &Visit<'_>) -> String {
        format!("@string/{}", title_resource(self.style, &visit.key))
    }
}

impl<'t> Visitor<'t> for UiVisitor<'_> {
    fn enter_group(&mut self, visit: &Visit<'t>) {
        let title = self.title(visit);
        self.xml.open(
            &self.style.screen,
            &[("app:title", title.as_str()), ("app:key", visit.path.as_str())],
        );
    }

    fn exit_group(&mut self, _visit: &Visit<'t>) {
        self.xml.close(&self.style.screen);
    }

    fn leaf(&mut self, visit: &Visit<'t>) {
        let title = self.title(visit);
        let key = visit.path.as_str();

        match visit.node.kind() {
            NodeKind::Boolean => {
                self.xml
                    .empty(&self.style.toggle, &[("app:title", title.as_str()), ("app:key", key)]);
            }
            NodeKind::Integer { min, max, .. } => {
                let min = min.to_string();
                let max = max.unwrap_or(UNBOUNDED_MAX).to_string();
                self.xml.empty(
                    &self.style.slider,
                    &[
                        ("app:title", title.as_str()),
                        ("app:min", min.as_str()),
                        ("android:max", max.as_str()),
                        ("app:showSeekBarValue", "true"),
                        ("app:key", key),
                    ],
                );
            }
            NodeKind::Enumerated { .. } => {
                let entries = format!("@array/{}", entries_array(&visit.key));
                let values = format!("@array/{}", values_array(&visit.key));
                self.xml.empty(
                    &self.style.list,
                    &[
                        ("app:title", title.as_str()),
                        ("app:entries", entries.as_str()),
                        ("app:entryValues", values.as_str()),
                        ("app:key", key),
                    ],
                );
            }
            // Groups arrive through enter_group/exit_group.
            NodeKind::Composite { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use prefgen_schema::{ConfigNode, Signedness};

    use super::*;

    #[test]
    fn test_unbounded_slider_uses_i32_max() {
        let tree = SettingsTree::new(vec![ConfigNode::composite(
            "Core",
            vec![ConfigNode::integer("Preferred SPU Threads", Signedness::Unsigned, 0, -1)],
        )]);
        let out = render_ui(&tree, &GeneratorTables::default(), &ResourceStyle::default()).unwrap();

        assert!(out.text.contains(r#"android:max="2147483647""#));
        assert!(out.text.contains(r#"app:min="0""#));
    }

    #[test]
    fn test_bounded_slider_keeps_max() {
        let tree = SettingsTree::new(vec![ConfigNode::composite(
            "Video",
            vec![ConfigNode::integer("Resolution Scale", Signedness::Signed, 25, 800)],
        )]);
        let out = render_ui(&tree, &GeneratorTables::default(), &ResourceStyle::default()).unwrap();

        assert!(out.text.contains(r#"app:min="25" android:max="800""#));
    }

    #[test]
    fn test_custom_tags() {
        let style = ResourceStyle {
            toggle: "aenu.preference.CheckBoxPreference".into(),
            title_prefix: "emulator_settings_".into(),
            ..ResourceStyle::default()
        };
        let tree = SettingsTree::new(vec![ConfigNode::composite(
            "Video",
            vec![ConfigNode::boolean("VSync")],
        )]);
        let out = render_ui(&tree, &GeneratorTables::default(), &style).unwrap();

        assert!(out.text.contains(
            r#"<aenu.preference.CheckBoxPreference app:title="@string/emulator_settings_video_vsync" app:key="Video|VSync" />"#
        ));
    }

    #[test]
    fn test_empty_tree_is_a_bare_screen() {
        let out = render_ui(
            &SettingsTree::default(),
            &GeneratorTables::default(),
            &ResourceStyle::default(),
        )
        .unwrap();
        assert!(out.text.starts_with("<?xml"));
        assert!(out.text.ends_with("</PreferenceScreen>\n"));
        assert_eq!(out.report.groups, 0);
    }
}
