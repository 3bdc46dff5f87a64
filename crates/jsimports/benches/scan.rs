//! Extraction throughput benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jsimports::extract;

const SAMPLE_SOURCE: &str = r#"
import React, { useState, useEffect } from "react";
import { createStore, applyMiddleware } from "redux";
import thunk from "redux-thunk";

import { rootReducer } from "./reducers";
import App from "./App";
import "./index.css";

const path = require('path');
const fs = require('fs');
const configPath = require.resolve('./config.json');

jest.mock('./api/client', () => ({
    get: jest.fn(),
    post: jest.fn(),
}));

export { configure } from "./configure";
export * from "./constants";

function bootstrap() {
    const store = createStore(rootReducer, applyMiddleware(thunk));
    const root = document.getElementById("root");
    React.render(<App store={store} />, root);
}

bootstrap();
"#;

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Bytes(SAMPLE_SOURCE.len() as u64));

    group.bench_function("sample", |b| {
        b.iter(|| extract(black_box(SAMPLE_SOURCE)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
