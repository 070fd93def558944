//! Toolbox integration tests: configuration -> toolbox -> per-request tools.

use serde_json::{json, Value};
use std::any::Any;
use std::sync::{Arc, Mutex};

use template_tools::container::{ApplicationAttributes, ContainerContext, ContainerLog};
use template_tools::link::{ActionMappings, MappingLinkTool};
use template_tools::logging::{ContainerLogger, LogSystem};
use template_tools::tools::{
    ClassRegistry, Configurable, Properties, PropertySet, Tool, ToolClass, Toolbox,
};
use template_tools::{BoxError, Config, Error};

const CONFIG: &str = r#"{
    "observability": {"log_level": "debug"},
    "toolbox": {
        "properties": {"locale": "en_US"},
        "tools": [
            {"key": "link", "class": "link"},
            {"key": "date", "class": "date", "properties": {"format": "short"}},
            {"key": "admin_date", "class": "date", "restrict_to": "/admin*",
             "properties": {"format": "long", "locale": "de_DE"}}
        ]
    },
    "mappings": {
        "servlet_mapping": "*.do",
        "actions": {"signIn": "/account/login"},
        "forwards": {"home": "/index.vm"}
    }
}"#;

/// Date formatting tool configured through `setup` and a `format` setter.
#[derive(Debug, Default)]
struct DateTool {
    locale: Option<String>,
    format: Option<String>,
    setup_calls: usize,
}

impl Tool for DateTool {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        Some(self)
    }

    fn as_property_set(&mut self) -> Option<&mut dyn PropertySet> {
        Some(self)
    }
}

impl Configurable for DateTool {
    fn setup(&mut self, properties: &Properties) -> Result<(), BoxError> {
        self.setup_calls += 1;
        self.locale = properties
            .get("locale")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(())
    }
}

impl PropertySet for DateTool {
    fn is_writable(&self, name: &str) -> bool {
        name == "format"
    }

    fn set_property(&mut self, _name: &str, value: Value) -> Result<(), BoxError> {
        self.format = Some(serde_json::from_value(value)?);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Lines(Mutex<Vec<String>>);

impl ContainerLog for Lines {
    fn write(&self, line: &str) {
        self.0.lock().unwrap().push(line.to_string());
    }
}

struct Fixture {
    toolbox: Toolbox,
    lines: Arc<Lines>,
}

fn setup() -> Fixture {
    let config = Config::from_json_str(CONFIG).unwrap();
    template_tools::observability::init_tracing(&config.observability);

    let lines = Arc::new(Lines::default());
    let sink: Arc<dyn ContainerLog> = lines.clone();
    let application =
        ApplicationAttributes::new().with_container_context(ContainerContext::new("shop", sink));
    let log: Arc<dyn LogSystem> = Arc::new(ContainerLogger::init(&application).unwrap());
    let application = Arc::new(application);

    let mut registry = ClassRegistry::new();
    registry.register_as("date", ToolClass::of::<DateTool>());
    registry.register_as(
        "link",
        MappingLinkTool::class(
            "link",
            application,
            Arc::new(ActionMappings::from_config(&config.mappings)),
            log,
        ),
    );

    Fixture {
        toolbox: Toolbox::from_config(&config.toolbox, &registry).unwrap(),
        lines,
    }
}

fn request_properties(path: &str) -> Properties {
    serde_json::from_value(json!({"context_path": "/shop", "request_path": path})).unwrap()
}

#[test]
fn test_public_page_gets_unrestricted_tools() {
    let fixture = setup();
    let tools = fixture
        .toolbox
        .create_tools(Some("/index.vm"), Some(&request_properties("/index.vm")))
        .unwrap();

    assert_eq!(tools.keys().cloned().collect::<Vec<_>>(), vec!["date", "link"]);

    let date = tools["date"].downcast_ref::<DateTool>().unwrap();
    assert_eq!(date.setup_calls, 1);
    assert_eq!(date.locale.as_deref(), Some("en_US"));
    assert_eq!(date.format.as_deref(), Some("short"));
}

#[test]
fn test_admin_page_gets_restricted_tool() {
    let fixture = setup();
    let tools = fixture
        .toolbox
        .create_tools(Some("/admin/users.vm"), None)
        .unwrap();

    let admin_date = tools["admin_date"].downcast_ref::<DateTool>().unwrap();
    assert_eq!(admin_date.locale.as_deref(), Some("de_DE"));
    assert_eq!(admin_date.format.as_deref(), Some("long"));
}

#[test]
fn test_request_properties_override_static() {
    let fixture = setup();
    let mut dynamic = request_properties("/index.vm");
    dynamic.insert("format".to_string(), json!("iso"));

    let tool = fixture.toolbox.get("date").unwrap().create(Some(&dynamic)).unwrap();
    assert_eq!(tool.downcast_ref::<DateTool>().unwrap().format.as_deref(), Some("iso"));
}

#[test]
fn test_link_tool_resolves_actions_and_forwards() {
    let fixture = setup();
    let tools = fixture
        .toolbox
        .create_tools(Some("/cart.vm"), Some(&request_properties("/cart.vm")))
        .unwrap();
    let link = tools["link"].downcast_ref::<MappingLinkTool>().unwrap();

    let login = link.param("next", "/cart.vm").set_action("signIn");
    assert_eq!(login.to_string(), "/shop/account/login.do?next=%2Fcart.vm");

    let home = link.set_forward("home").unwrap();
    assert_eq!(home.to_string(), "/shop/index.vm");
    assert!(fixture.lines.0.lock().unwrap().is_empty());
}

#[test]
fn test_unknown_forward_is_logged_to_container() {
    let fixture = setup();
    let tool = fixture
        .toolbox
        .get("link")
        .unwrap()
        .create(Some(&request_properties("/cart.vm")))
        .unwrap();
    let link = tool.downcast_ref::<MappingLinkTool>().unwrap();

    assert!(link.set_forward("checkout").is_none());

    let lines = fixture.lines.0.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(" Engine   [warn] "));
    assert!(lines[0].contains("checkout"));
}

#[test]
fn test_bad_request_property_fails_only_that_request() {
    let fixture = setup();
    let bad: Properties = serde_json::from_value(json!({"context_path": 7})).unwrap();

    let err = fixture.toolbox.create_tools(None, Some(&bad)).unwrap_err();
    assert!(matches!(err, Error::PropertyAssignment { ref property, .. } if property == "context_path"));

    let ok = fixture
        .toolbox
        .create_tools(None, Some(&request_properties("/index.vm")))
        .unwrap();
    assert_eq!(ok.len(), 2);
}

#[test]
fn test_logger_requires_container_context() {
    let err = ContainerLogger::init(&ApplicationAttributes::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
}
