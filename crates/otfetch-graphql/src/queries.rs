//! Fixed GraphQL query text for both endpoints.
//!
//! The selection sets are part of the wire contract: the record builders
//! in otfetch-tables assume exactly these shapes.

/// Platform: targets associated with a disease, with per-datatype scores.
pub const DISEASE_ASSOCIATIONS_QUERY: &str = r#"
    query DiseaseAssociationsQuery($efoId: String!, $index: Int!, $size: Int!, $filter: String, $sortBy: String!, $aggregationFilters: [AggregationFilter!]) {
      disease(efoId: $efoId) {
        id
        associatedTargets(page: {index: $index, size: $size}, orderByScore: $sortBy, BFilter: $filter, aggregationFilters: $aggregationFilters) {
          count
          rows {
            target {
              id
              approvedSymbol
              approvedName
              __typename
            }
            score
            datatypeScores {
              componentId: id
              score
              __typename
            }
            __typename
          }
          __typename
        }
        __typename
      }
    }
"#;

/// Platform: genetic-association evidence rows for one gene and disease.
pub const DISEASE_EVIDENCES_QUERY: &str = r#"
    query OpenTargetsGeneticsQuery(
      $ensemblId: String!
      $efoId: String!
      $size: Int!
    ) {
      disease(efoId: $efoId) {
        id
        evidences(
          ensemblIds: [$ensemblId]
          enableIndirect: true
          size: $size
          datasourceIds: ["ot_genetics_portal"]
        ) {
          rows {
            id
            disease {
              id
              name
            }
            diseaseFromSource
            studyId
            studySampleSize
            variantId
            variantRsId
            literature
            publicationYear
            publicationFirstAuthor
            pValueExponent
            pValueMantissa
            oddsRatio
            oddsRatioConfidenceIntervalLower
            oddsRatioConfidenceIntervalUpper
            beta
            betaConfidenceIntervalLower
            betaConfidenceIntervalUpper
            variantFunctionalConsequence {
              id
              label
            }
            resourceScore
            projectId
          }
        }
      }
    }
"#;

/// Genetics: free-text search resolving an rsID to variant identifiers.
pub const VARIANT_SEARCH_QUERY: &str = r#"
    query searchRsId($rsId: String!) {
        search(queryString: $rsId) {
            variants {
                id
            }
        }
    }
"#;

/// Genetics: full annotation for one variant, including the gnomAD
/// population allele frequencies folded into `gnomAD2_AF_popmax`
/// downstream.
pub const VARIANT_INFO_QUERY: &str = r#"
    query variantInfo($variantId: String!) {
        variantInfo(variantId: $variantId) {
            id
            rsId
            chromosome
            position
            refAllele
            altAllele
            nearestGene {
                symbol
            }
            nearestGeneDistance
            nearestCodingGeneDistance
            mostSevereConsequence
            caddRaw
            caddPhred
            gnomadAFR
            gnomadAMR
            gnomadASJ
            gnomadEAS
            gnomadFIN
            gnomadNFE
            gnomadNFEEST
            gnomadNFENWE
            gnomadNFESEU
            gnomadNFEONF
            gnomadOTH
        }
    }
"#;
