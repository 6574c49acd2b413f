//! Reflected assemblies and matching XML documentation used across tests.
//!
//! Every doc entry in the fixtures below names a reflected symbol and every
//! reflected symbol has an entry, so a build over them is diagnostic-free.

use docdom::docs::XmlDocFile;
use docdom::metadata::{
    AssemblyMetadata, ReflectedMember, ReflectedType, TypeFlags, TypeRef, Visibility,
};

pub fn int() -> TypeRef {
    TypeRef::named("System.Int32")
}

pub fn string() -> TypeRef {
    TypeRef::named("System.String")
}

// ============================================================================
// Acme.Core
// ============================================================================

pub fn core_assembly() -> AssemblyMetadata {
    let order = ReflectedType::class("Acme.Core.Order")
        .with_member(ReflectedMember::constructor("Acme.Core.Order").with_parameter("id", int()))
        .with_member(ReflectedMember::property("Acme.Core.Order", "Total", TypeRef::named("System.Decimal")))
        .with_member(ReflectedMember::method("Acme.Core.Order", "Do", TypeRef::void()).with_parameter("reason", string()))
        .with_member(ReflectedMember::method("Acme.Core.Order", "Do", TypeRef::void()))
        .with_member(ReflectedMember::method("Acme.Core.Order", "Do", TypeRef::void()).with_parameter("count", int()))
        .with_member(ReflectedMember::event("Acme.Core.Order", "Changed", TypeRef::named("System.EventHandler")))
        .with_member(ReflectedMember::field("Acme.Core.Order", "MaxLines", int()).as_static());

    let money = TypeRef::named("Acme.Core.Money");
    let money_type = ReflectedType::new("Acme.Core.Money", TypeFlags::STRUCT)
        .with_base(TypeRef::named("System.ValueType"))
        .with_member(
            ReflectedMember::operator("Acme.Core.Money", "op_Addition", money.clone())
                .with_parameter("a", money.clone())
                .with_parameter("b", money.clone()),
        )
        .with_member(
            ReflectedMember::operator("Acme.Core.Money", "op_Implicit", TypeRef::named("System.Decimal"))
                .with_parameter("value", money),
        );

    let repository = ReflectedType::class("Acme.Core.Repository`1")
        .with_generic_parameter("T")
        .with_member(
            ReflectedMember::method("Acme.Core.Repository`1", "Find", TypeRef::named("System.Boolean"))
                .with_parameter("item", TypeRef::type_param(0, "T")),
        );
    let entry = ReflectedType::class("Acme.Core.Repository`1+Entry").nested_in("Acme.Core.Repository`1");

    AssemblyMetadata::new("Acme.Core")
        .with_type(order)
        .with_type(money_type)
        .with_type(repository)
        .with_type(entry)
}

pub const CORE_DOCS: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Acme.Core</name></assembly>
    <members>
        <member name="T:Acme.Core.Order"><summary>A customer order.</summary></member>
        <member name="M:Acme.Core.Order.#ctor(System.Int32)">
            <summary>Creates an order.</summary>
            <param name="id">Order number.</param>
        </member>
        <member name="P:Acme.Core.Order.Total"><summary>Order total.</summary></member>
        <member name="M:Acme.Core.Order.Do"><summary>Does it.</summary></member>
        <member name="M:Acme.Core.Order.Do(System.Int32)">
            <summary>Does it several times.</summary>
            <param name="count">How many times.</param>
        </member>
        <member name="M:Acme.Core.Order.Do(System.String)">
            <summary>Does it for a reason.</summary>
            <param name="reason">Why.</param>
        </member>
        <member name="E:Acme.Core.Order.Changed"><summary>Raised on change.</summary></member>
        <member name="F:Acme.Core.Order.MaxLines"><summary>Line limit.</summary></member>
        <member name="T:Acme.Core.Money"><summary>An amount of money.</summary></member>
        <member name="M:Acme.Core.Money.op_Addition(Acme.Core.Money,Acme.Core.Money)">
            <summary>Adds two amounts.</summary>
            <param name="a">Left.</param>
            <param name="b">Right.</param>
        </member>
        <member name="M:Acme.Core.Money.op_Implicit(Acme.Core.Money)~System.Decimal">
            <summary>Converts to decimal.</summary>
            <param name="value">The amount.</param>
        </member>
        <member name="T:Acme.Core.Repository`1">
            <summary>Stores items.</summary>
            <typeparam name="T">Item type.</typeparam>
        </member>
        <member name="M:Acme.Core.Repository`1.Find(`0)">
            <summary>Looks an item up.</summary>
            <param name="item">The item.</param>
            <returns>True when found.</returns>
        </member>
        <member name="T:Acme.Core.Repository`1.Entry"><summary>One stored item.</summary></member>
    </members>
</doc>
"#;

pub fn core_docs() -> XmlDocFile {
    XmlDocFile::from_text("Acme.Core.xml", CORE_DOCS)
}

// ============================================================================
// Acme.Ext (extends Acme.Core across the assembly boundary)
// ============================================================================

pub fn ext_assembly() -> AssemblyMetadata {
    let extensions = ReflectedType::new("Acme.Core.OrderExtensions", TypeFlags::STATIC_CLASS)
        .with_base(TypeRef::named("System.Object"))
        .with_member(
            ReflectedMember::method("Acme.Core.OrderExtensions", "Describe", string())
                .as_extension()
                .with_parameter("order", TypeRef::named("Acme.Core.Order")),
        );
    let helper = ReflectedType::class("Acme.Ext.Helper")
        .with_member(ReflectedMember::method("Acme.Ext.Helper", "Run", TypeRef::void()));

    AssemblyMetadata::new("Acme.Ext")
        .with_type(extensions)
        .with_type(helper)
}

pub const EXT_DOCS: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Acme.Ext</name></assembly>
    <members>
        <member name="T:Acme.Core.OrderExtensions"><summary>Order helpers.</summary></member>
        <member name="M:Acme.Core.OrderExtensions.Describe(Acme.Core.Order)">
            <summary>Describes an order.</summary>
            <param name="order">The order.</param>
        </member>
        <member name="T:Acme.Ext.Helper"><summary>Runs things.</summary></member>
        <member name="M:Acme.Ext.Helper.Run"><summary>Runs.</summary></member>
    </members>
</doc>
"#;

pub fn ext_docs() -> XmlDocFile {
    XmlDocFile::from_text("Acme.Ext.xml", EXT_DOCS)
}

// ============================================================================
// Acme.Shapes (inheritance and overrides)
// ============================================================================

pub fn shapes_assembly() -> AssemblyMetadata {
    let double = TypeRef::named("System.Double");
    let area = ReflectedMember::method("Acme.Shapes.Shape", "Area", double.clone()).as_virtual();
    let scale = ReflectedMember::method("Acme.Shapes.Shape", "Scale", TypeRef::void())
        .as_virtual()
        .with_parameter("factor", double.clone());

    let shape = ReflectedType::class("Acme.Shapes.Shape")
        .with_member(area.clone())
        .with_member(scale.clone());
    let circle = ReflectedType::class("Acme.Shapes.Circle")
        .with_base(TypeRef::named("Acme.Shapes.Shape"))
        .with_member(
            ReflectedMember::method("Acme.Shapes.Circle", "Area", double.clone())
                .as_virtual()
                .with_base_definition(area.clone()),
        )
        .with_member(
            ReflectedMember::method("Acme.Shapes.Circle", "Scale", TypeRef::void())
                .as_virtual()
                .with_parameter("factor", double.clone())
                .with_base_definition(scale.clone()),
        )
        .with_member(ReflectedMember::field("Acme.Shapes.Circle", "radius", double.clone()).with_visibility(Visibility::Private));
    let ring = ReflectedType::class("Acme.Shapes.Ring")
        .with_base(TypeRef::named("Acme.Shapes.Circle"))
        .with_member(
            ReflectedMember::method("Acme.Shapes.Ring", "Area", double)
                .as_virtual()
                .with_base_definition(area),
        )
        // Inherited from Circle, reflected on Ring.
        .with_member(ReflectedMember::method("Acme.Shapes.Circle", "Scale", TypeRef::void())
            .as_virtual()
            .with_parameter("factor", TypeRef::named("System.Double"))
            .with_base_definition(scale));

    AssemblyMetadata::new("Acme.Shapes")
        .with_type(ring)
        .with_type(circle)
        .with_type(shape)
}

pub const SHAPES_DOCS: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Acme.Shapes</name></assembly>
    <members>
        <member name="T:Acme.Shapes.Shape"><summary>A shape.</summary></member>
        <member name="M:Acme.Shapes.Shape.Area"><summary>Computes the area.</summary></member>
        <member name="M:Acme.Shapes.Shape.Scale(System.Double)">
            <summary>Scales the shape.</summary>
            <param name="factor">Scale factor.</param>
        </member>
        <member name="T:Acme.Shapes.Circle"><summary>A circle.</summary></member>
        <member name="M:Acme.Shapes.Circle.Scale(System.Double)"><inheritdoc/></member>
        <member name="T:Acme.Shapes.Ring"><summary>A ring.</summary></member>
    </members>
</doc>
"#;

pub fn shapes_docs() -> XmlDocFile {
    XmlDocFile::from_text("Acme.Shapes.xml", SHAPES_DOCS)
}

// ============================================================================
// Namespace prose
// ============================================================================

pub const NAMESPACE_DOCS: &str = r#"<?xml version="1.0"?>
<doc>
    <members>
        <member name="N:Acme.Core"><summary>Core order types.</summary></member>
        <member name="Acme.Ext"><summary>Extension helpers.</summary></member>
    </members>
</doc>
"#;

pub fn namespace_docs() -> XmlDocFile {
    XmlDocFile::from_text("namespaces.xml", NAMESPACE_DOCS)
}

/// A doc file that is not well-formed XML.
pub fn malformed_docs(label: &str) -> XmlDocFile {
    XmlDocFile::from_text(
        label,
        r#"<doc><members><member name="T:Broken"><summary>oops</remarks></member></members></doc>"#,
    )
}
