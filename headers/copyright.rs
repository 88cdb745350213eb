// Copyright (c) {year} The Project Authors. All rights reserved.
