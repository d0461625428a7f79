//! Code generated by mibgen. DO NOT EDIT.
//!
//! Bindings of the `mibs` unit.

#![allow(non_snake_case, non_upper_case_globals, unused_imports)]

pub mod link_mib {
use mibgen_models::prelude::*;

/**
Link fixture.
*/
pub struct LinkMibModule {
    pub LinkStatus: &'static ScalarNode,
    pub LinkTable: &'static TableNode,
    pub LinkEntry: &'static RowNode,
    pub LinkIndex: &'static ColumnNode,
    pub LinkName: &'static ColumnNode,
    pub LinkDown: &'static NotificationNode,
}

pub static LinkMib: LinkMibModule = LinkMibModule {
    LinkStatus: &linkStatusNode,
    LinkTable: &linkTableNode,
    LinkEntry: &linkEntryNode,
    LinkIndex: &linkIndexNode,
    LinkName: &linkNameNode,
    LinkDown: &linkDownNode,
};

/**
Operational state.
*/
pub static linkStatusNode: ScalarNode = ScalarNode {
    base: BaseNode {
        name: "linkStatus",
        oid: &[1, 3, 6, 1, 4, 1, 7, 1, 0],
        oid_formatted: "1.3.6.1.4.1.7.1.0",
        oid_len: 9,
    },
    syntax: &super::types::LinkStatusType,
};

pub static linkTableNode: TableNode = TableNode {
    base: BaseNode {
        name: "linkTable",
        oid: &[1, 3, 6, 1, 4, 1, 7, 2],
        oid_formatted: "1.3.6.1.4.1.7.2",
        oid_len: 8,
    },
    row: &linkEntryNode,
};

pub static linkEntryNode: RowNode = RowNode {
    base: BaseNode {
        name: "linkEntry",
        oid: &[1, 3, 6, 1, 4, 1, 7, 2, 1],
        oid_formatted: "1.3.6.1.4.1.7.2.1",
        oid_len: 9,
    },
    columns: &[&linkIndexNode, &linkNameNode],
    index: &[&linkIndexNode],
};

pub static linkIndexNode: ColumnNode = ColumnNode {
    scalar: ScalarNode {
    base: BaseNode {
        name: "linkIndex",
        oid: &[1, 3, 6, 1, 4, 1, 7, 2, 1, 1],
        oid_formatted: "1.3.6.1.4.1.7.2.1.1",
        oid_len: 10,
    },
    syntax: &Type {
    base_type: BaseType::Unsigned32,
    name: "Unsigned32",
    ..Type::EMPTY
},
},
};

pub static linkNameNode: ColumnNode = ColumnNode {
    scalar: ScalarNode {
    base: BaseNode {
        name: "linkName",
        oid: &[1, 3, 6, 1, 4, 1, 7, 2, 1, 2],
        oid_formatted: "1.3.6.1.4.1.7.2.1.2",
        oid_len: 10,
    },
    syntax: &super::types::DisplayStringType,
},
};

pub static linkDownNode: NotificationNode = NotificationNode {
    base: BaseNode {
        name: "linkDown",
        oid: &[1, 3, 6, 1, 4, 1, 7, 3],
        oid_formatted: "1.3.6.1.4.1.7.3",
        oid_len: 8,
    },
    objects: &[&linkStatusNode, &linkNameNode.scalar],
};

}

pub mod types {
use mibgen_models::prelude::*;

pub static DisplayStringType: Type = Type {
    base_type: BaseType::OctetString,
    name: "DisplayString",
    ranges: &[
        Range { base_type: BaseType::Unsigned32, min: 0, max: 255 },
    ],
    format: Some("255a"),
    ..Type::EMPTY
};

pub static LinkStatusType: Type = Type {
    base_type: BaseType::Enum,
    name: "LinkStatus",
    enumeration: Some(&Enum {
        base_type: BaseType::Enum,
        values: &[
            EnumValue { value: -1, name: "neg" },
            EnumValue { value: 1, name: "up" },
            EnumValue { value: 2, name: "down" },
        ],
    }),
    ..Type::EMPTY
};

}
