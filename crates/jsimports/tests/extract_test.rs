//! Whole-file extraction over realistic source fixtures.

use jsimports::{extract, ExtractError};

#[test]
fn test_react_component_file() {
    let source = r#"import React, { useEffect, useState } from "react";
import PropTypes from "prop-types";
import { connect } from "react-redux";

import { fetchItems } from "./actions";
import ItemList from "./ItemList";
import "./styles.css";

function Dashboard({ items, dispatch }) {
    const [loading, setLoading] = useState(true);

    useEffect(() => {
        dispatch(fetchItems()).then(() => setLoading(false));
    }, [dispatch]);

    return <ItemList items={items} loading={loading} />;
}

export default connect((state) => ({ items: state.items }))(Dashboard);
"#;

    assert_eq!(
        extract(source).unwrap(),
        [
            "./ItemList",
            "./actions",
            "./styles.css",
            "prop-types",
            "react",
            "react-redux",
        ]
    );
}

#[test]
fn test_commonjs_server_file() {
    let source = r#"'use strict';

const fs = require('fs');
const path = require('path');
const express = require('express');

const configPath = require.resolve('./config/default.json');
const { logger } = require('./lib/Logger');

module.exports = { configPath };
"#;

    // CommonJS paths are folded to lower case.
    assert_eq!(
        extract(source).unwrap(),
        [
            "./config/default.json",
            "./lib/logger",
            "express",
            "fs",
            "path",
        ]
    );
}

#[test]
fn test_jest_spec_file() {
    let source = r#"import { mount } from "enzyme";

jest.mock('./API', () => {
    return jest.requireActual('./API');
});
jest.mock('./Router');

const mocked = jest.createMockFromModule('./Store');

describe('widget', () => {
    it('mounts', () => {
        const widget = mount(<Widget />);
        expect(widget).toBeTruthy();
    });
});
"#;

    assert_eq!(
        extract(source).unwrap(),
        ["./api", "./api", "./router", "./store", "enzyme"]
    );
}

#[test]
fn test_multiline_import_clause() {
    let source = r#"import {
    first,
    second,
    third,
} from "@scope/wide-module";

export {
    first,
} from "./re-export";
"#;

    assert_eq!(
        extract(source).unwrap(),
        ["./re-export", "@scope/wide-module"]
    );
}

#[test]
fn test_commented_imports_are_ignored() {
    let source = r#"// import old from "removed";
// const legacy = require('legacy');
import current from "kept";
"#;

    assert_eq!(extract(source).unwrap(), ["kept"]);
}

#[test]
fn test_broken_literal_aborts_extraction() {
    let source = "import ok from \"fine\";\nconst bad = require(\"oops);\n";

    let ExtractError::Unquote { raw, .. } = extract(source).unwrap_err();
    assert_eq!(raw, "\"oops);");
}
